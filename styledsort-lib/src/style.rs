//! Ordering and layout of logical rule lines.

pub mod classifier;
pub mod comparator;
pub mod groups;
pub mod pseudo;
