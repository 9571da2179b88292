//! Sorts and re-indents the CSS rules embedded in styled-components style
//! tagged template literals.
//!
//! The engine works on plain text: [`parser`] breaks a rule blob into logical
//! lines and finds the blobs in a source file, [`style`] orders and formats
//! those lines, and [`styled_sort`] ties both together into edits against a
//! [`document::text_document::SourceDocument`].

pub mod document;
pub mod error;
pub mod files;
pub mod parser;
pub mod style;
pub mod styled_sort;

pub use error::StyledSortError;
pub use styled_sort::{format_rules, sort_document, sort_document_text, SortOptions};
