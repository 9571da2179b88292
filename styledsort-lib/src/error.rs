//! Error type shared by the engine, the edit applier and the file driver.

use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong while sorting embedded style rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledSortError {
    /// A `&:<state>{` block was opened but the rule blob ended before its `}`.
    UnclosedPseudoSelector { selector: String },
    /// Two edits of one batch touch the same bytes.
    OverlappingEdits { first: (usize, usize), second: (usize, usize) },
    /// An edit points outside the text, or splits a UTF-8 character.
    EditOutOfBounds { span: (usize, usize), len: usize },
    /// Reading or writing a source file failed.
    Io { path: PathBuf, message: String },
}

impl fmt::Display for StyledSortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyledSortError::UnclosedPseudoSelector { selector } => {
                write!(f, "pseudo selector `{}` is never closed", selector)
            }
            StyledSortError::OverlappingEdits { first, second } => write!(
                f,
                "edits {}..{} and {}..{} overlap",
                first.0, first.1, second.0, second.1
            ),
            StyledSortError::EditOutOfBounds { span, len } => write!(
                f,
                "edit {}..{} is not a valid range of a {} byte text",
                span.0, span.1, len
            ),
            StyledSortError::Io { path, message } => {
                write!(f, "IO error on {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for StyledSortError {}

impl StyledSortError {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        StyledSortError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
