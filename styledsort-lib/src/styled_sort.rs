use crate::document::text_document::{EditBatch, SourceDocument};
use crate::error::StyledSortError;
use crate::parser::line_breaker::insert_line_breaks;
use crate::parser::locator::{locate_rule_blobs, RuleBlob};
use crate::parser::tokenizer::split_logical_lines;
use crate::style::comparator::{sort_rules, SortPolicy};
use crate::style::groups::{format_groups, space_pseudo_selectors, GroupOptions};
use crate::style::pseudo::extract_pseudo_selectors;
use log::{debug, warn};
use std::ops::Range;

const TOP_LEVEL_DEPTH: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub policy: SortPolicy,
    pub groups: GroupOptions,
}

/// Sorts and re-indents one rule blob.
pub fn format_rules(blob: &str, options: &SortOptions) -> Result<String, StyledSortError> {
    let lines = split_logical_lines(&insert_line_breaks(blob));
    let working = extract_pseudo_selectors(&lines, options.policy, &options.groups)?;
    let sorted = sort_rules(working, options.policy);
    let formatted = format_groups(&sorted, TOP_LEVEL_DEPTH, &options.groups);

    // spacer line above each pseudo-selector block
    Ok(space_pseudo_selectors(&formatted))
}

/// Edits sorting every rule blob of `document`. Unsupported languages get an
/// empty batch; blobs that fail to format are left alone.
pub fn sort_document(document: &SourceDocument, options: &SortOptions) -> EditBatch {
    let mut batch = EditBatch::new();

    if document.language().is_none() {
        debug!(
            "skipping document with unsupported language `{}`",
            document.language_id
        );
        return batch;
    }

    for blob in locate_rule_blobs(&document.text) {
        let position = document.position_at(blob.span.start);
        let formatted = match format_rules(blob.body, options) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!(
                    "leaving rules at {}:{} unsorted: {}",
                    position.line + 1,
                    position.character + 1,
                    err
                );
                continue;
            }
        };

        let (span, replacement) = replacement_for(document, &blob, formatted);
        if document.text[span.clone()] == replacement {
            continue;
        }
        debug!(
            "sorting rules at {}:{}",
            position.line + 1,
            position.character + 1
        );
        batch.replace(document, span, replacement);
    }

    batch
}

pub fn sort_document_text(
    document: &SourceDocument,
    options: &SortOptions,
) -> Result<String, StyledSortError> {
    sort_document(document, options).apply(&document.text)
}

/// The replaced span runs from the line after the opening backtick up to the
/// closing backtick. When rules share the backtick's line the span starts
/// right after the backtick instead and the replacement opens with a line
/// break, so those rules are neither kept twice nor left on the tag line.
fn replacement_for(
    document: &SourceDocument,
    blob: &RuleBlob<'_>,
    formatted: String,
) -> (Range<usize>, String) {
    let end = blob.closing_backtick();
    let start = blob.body_span.start;
    let next_line = document.line_start_after(start);
    if next_line <= end && document.text[start..next_line].trim().is_empty() {
        (next_line..end, formatted)
    } else {
        (start..end, format!("\n{}", formatted))
    }
}
