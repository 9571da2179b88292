use crate::style::classifier::{has_vendor_prefix, is_interpolation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupOptions {
    /// First line index that may get a blank line after an interpolation.
    pub interpolation_gap_from: usize,
}

impl Default for GroupOptions {
    fn default() -> Self {
        GroupOptions {
            interpolation_gap_from: 1,
        }
    }
}

/// One rule per line, indented by `depth` tabs. Blank lines separate
/// interpolations from what follows them and open each vendor-prefixed run.
pub fn format_groups(rules: &[String], depth: usize, options: &GroupOptions) -> String {
    let indent = "\t".repeat(depth);
    let mut result = String::new();

    for (index, rule) in rules.iter().enumerate() {
        if index > 0 {
            let previous = &rules[index - 1];

            // both separators may fire for the same rule
            if index >= options.interpolation_gap_from
                && !is_interpolation(rule)
                && is_interpolation(previous)
            {
                result.push('\n');
            }

            if has_vendor_prefix(rule) && !has_vendor_prefix(previous) {
                result.push('\n');
            }
        }

        result.push_str(&indent);
        result.push_str(rule);
        result.push('\n');
    }

    result
}

/// Returns `text` with `insertion` placed at byte offset `index`, which must
/// lie on a char boundary. An index past the end appends.
pub fn insert_at(text: &str, index: usize, insertion: &str) -> String {
    let index = index.min(text.len());
    let mut result = String::with_capacity(text.len() + insertion.len());
    result.push_str(&text[..index]);
    result.push_str(insertion);
    result.push_str(&text[index..]);
    result
}

/// Puts `\n\t` in front of the first `&:` of every line that has one, which
/// leaves a spacer line above each pseudo-selector block.
pub fn space_pseudo_selectors(formatted: &str) -> String {
    let mut offsets = Vec::new();
    let mut line_start = 0;
    for line in formatted.split_inclusive('\n') {
        if let Some(pos) = line.find("&:") {
            offsets.push(line_start + pos);
        }
        line_start += line.len();
    }

    offsets
        .iter()
        .rev()
        .fold(formatted.to_string(), |text, &offset| insert_at(&text, offset, "\n\t"))
}
