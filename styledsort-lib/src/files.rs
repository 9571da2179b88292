//! Sorting whole files from disk.

use crate::document::text_document::{Language, SourceDocument};
use crate::error::StyledSortError;
use crate::styled_sort::{sort_document, SortOptions};
use log::info;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of sorting one file. Nothing is written until [`write_outcome`].
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub edits: usize,
    pub original: String,
    pub formatted: String,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        self.original != self.formatted
    }
}

/// Reads `path` and sorts its rule blobs. `language` overrides the language
/// guessed from the file extension.
pub fn sort_file(
    path: &Path,
    options: &SortOptions,
    language: Option<Language>,
) -> Result<FileOutcome, StyledSortError> {
    let original = fs::read_to_string(path).map_err(|err| StyledSortError::io(path, err))?;
    let document = match language {
        Some(language) => SourceDocument::new(language.id(), original.as_str()),
        None => SourceDocument::for_path(path, original.as_str()),
    };

    let batch = sort_document(&document, options);
    let formatted = batch.apply(&document.text)?;
    info!("{}: {} rule block(s) sorted", path.display(), batch.len());

    Ok(FileOutcome {
        path: path.to_path_buf(),
        edits: batch.len(),
        original,
        formatted,
    })
}

/// Sorts many files in parallel. Results come back in the order of `paths`.
pub fn sort_files(
    paths: &[PathBuf],
    options: &SortOptions,
    language: Option<Language>,
) -> Vec<Result<FileOutcome, StyledSortError>> {
    paths
        .par_iter()
        .map(|path| sort_file(path, options, language))
        .collect()
}

/// Writes the formatted text back when it differs from the original.
pub fn write_outcome(outcome: &FileOutcome) -> Result<bool, StyledSortError> {
    if !outcome.changed() {
        return Ok(false);
    }
    fs::write(&outcome.path, &outcome.formatted)
        .map_err(|err| StyledSortError::io(&outcome.path, err))?;
    Ok(true)
}
