//! Pulls `&:<state>{ ... }` blocks out of the outer rule lines. The first
//! line that is exactly `}` closes a block; nested braces are not counted.

use crate::error::StyledSortError;
use crate::parser::line_breaker::insert_line_breaks;
use crate::parser::tokenizer::split_logical_lines;
use crate::style::classifier::is_pseudo_selector;
use crate::style::comparator::{sort_rules, SortPolicy};
use crate::style::groups::{format_groups, GroupOptions};

const NESTED_DEPTH: usize = 2;

#[derive(Debug)]
enum ScanState {
    Outside,
    InsidePseudo { selector: String, body: String },
}

/// Outer lines first, then one reassembled entry per block in source order.
pub fn extract_pseudo_selectors(
    lines: &[String],
    policy: SortPolicy,
    groups: &GroupOptions,
) -> Result<Vec<String>, StyledSortError> {
    let mut outer = Vec::with_capacity(lines.len());
    let mut blocks = Vec::new();
    let mut state = ScanState::Outside;

    for line in lines {
        state = match state {
            ScanState::Outside if is_pseudo_selector(line) => ScanState::InsidePseudo {
                selector: line.clone(),
                body: String::new(),
            },
            ScanState::Outside => {
                outer.push(line.clone());
                ScanState::Outside
            }
            ScanState::InsidePseudo { selector, body } if line == "}" => {
                blocks.push(reassemble_block(&selector, &body, policy, groups));
                ScanState::Outside
            }
            ScanState::InsidePseudo { selector, mut body } => {
                // No separator: the body goes through the line breaker again.
                body.push_str(line);
                ScanState::InsidePseudo { selector, body }
            }
        };
    }

    if let ScanState::InsidePseudo { selector, .. } = state {
        return Err(StyledSortError::UnclosedPseudoSelector { selector });
    }

    outer.extend(blocks);
    Ok(outer)
}

fn reassemble_block(
    selector: &str,
    body: &str,
    policy: SortPolicy,
    groups: &GroupOptions,
) -> String {
    let body_lines = split_logical_lines(&insert_line_breaks(body));
    let sorted = sort_rules(body_lines, policy);
    format!(
        "{}\n{}\t}}",
        selector,
        format_groups(&sorted, NESTED_DEPTH, groups)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn extract(items: &[&str]) -> Result<Vec<String>, StyledSortError> {
        extract_pseudo_selectors(&lines(items), SortPolicy::Category, &GroupOptions::default())
    }

    #[test]
    fn test_block_is_reassembled() {
        let result = extract(&["color:red;", "&:hover{", "opacity:1;", "color:blue;", "}"]).unwrap();
        assert_eq!(
            result,
            lines(&["color:red;", "&:hover{\n\t\tcolor:blue;\n\t\topacity:1;\n\t}"])
        );
    }

    #[test]
    fn test_blocks_are_appended_after_outer_lines() {
        let result = extract(&[
            "&:focus{",
            "outline:none;",
            "}",
            "margin:0;",
            "&:active{",
            "}",
            "top:0;",
        ])
        .unwrap();
        assert_eq!(
            result,
            lines(&[
                "margin:0;",
                "top:0;",
                "&:focus{\n\t\toutline:none;\n\t}",
                "&:active{\n\t}",
            ])
        );
    }

    #[test]
    fn test_body_interpolations_are_grouped() {
        let result = extract(&["&:hover{", "color:blue;", "${hoverMixin}", "}"]).unwrap();
        assert_eq!(
            result,
            lines(&["&:hover{\n\t\t${hoverMixin}\n\n\t\tcolor:blue;\n\t}"])
        );
    }

    #[test]
    fn test_lines_without_blocks_are_untouched() {
        let input = ["b:1;", "a:1;", "}"];
        assert_eq!(extract(&input).unwrap(), lines(&input));
    }

    #[test]
    fn test_other_ampersand_selectors_are_not_blocks() {
        let input = ["&::before{", "content:'';", "}"];
        assert_eq!(extract(&input).unwrap(), lines(&input));
    }

    #[test]
    fn test_unclosed_block_is_an_error() {
        let err = extract(&["color:red;", "&:hover{", "color:blue;"]).unwrap_err();
        assert_eq!(
            err,
            StyledSortError::UnclosedPseudoSelector {
                selector: "&:hover{".to_string()
            }
        );
    }
}
