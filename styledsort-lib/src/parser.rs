//! Text-level scanning: statement line breaks, logical lines, and locating
//! rule blobs inside a source file.

pub mod line_breaker;
pub mod locator;
pub mod tokenizer;
