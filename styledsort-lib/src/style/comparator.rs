use crate::style::classifier::{classify, is_interpolation};
use std::cmp::Ordering;

pub trait LineComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Final pass over the sorted lines.
    fn arrange(&self, lines: Vec<String>) -> Vec<String> {
        lines
    }
}

/// Category rank first, then plain string order. Categorised lines sort
/// before uncategorised ones; two uncategorised lines keep their order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryComparator;

impl LineComparator for CategoryComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (classify(a), classify(b)) {
            (Some(a_cat), Some(b_cat)) => a_cat.cmp(&b_cat).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Lexicographic order with leading punctuation read as `z`. Interpolations
/// are moved to the front afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedLexicographicComparator;

impl NormalizedLexicographicComparator {
    fn sort_key(line: &str) -> (bool, &str) {
        let stripped = line.trim_start_matches(|c: char| !is_word_char(c));
        (stripped.len() != line.len(), stripped)
    }
}

impl LineComparator for NormalizedLexicographicComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let (a_stripped, a_rest) = Self::sort_key(a);
        let (b_stripped, b_rest) = Self::sort_key(b);
        normalized_chars(a_stripped, a_rest).cmp(normalized_chars(b_stripped, b_rest))
    }

    fn arrange(&self, lines: Vec<String>) -> Vec<String> {
        let (mut front, rest): (Vec<String>, Vec<String>) =
            lines.into_iter().partition(|line| is_interpolation(line));
        front.extend(rest);
        front
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn normalized_chars(stripped: bool, rest: &str) -> impl Iterator<Item = char> + '_ {
    let sentinel = if stripped { Some('z') } else { None };
    sentinel.into_iter().chain(rest.chars())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    #[default]
    Category,
    NormalizedLexicographic,
}

impl SortPolicy {
    pub fn comparator(self) -> &'static dyn LineComparator {
        match self {
            SortPolicy::Category => &CategoryComparator,
            SortPolicy::NormalizedLexicographic => &NormalizedLexicographicComparator,
        }
    }
}

/// Drops empty lines and sorts the rest with `policy`. The sort is stable.
pub fn sort_rules(lines: Vec<String>, policy: SortPolicy) -> Vec<String> {
    let comparator = policy.comparator();
    let mut sorted: Vec<String> = lines.into_iter().filter(|line| !line.is_empty()).collect();
    sorted.sort_by(|a, b| comparator.compare(a, b));
    comparator.arrange(sorted)
}
