//! Sort categories of logical lines. Lines matching no category sort last.

/// Browser prefixes that start their own visual group.
pub const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Interpolation,
    Plain,
    PseudoSelector,
}

impl Category {
    // 2 was a duplicate interpolation rank that could never match.
    pub fn rank(self) -> u8 {
        match self {
            Category::Interpolation => 0,
            Category::Plain => 1,
            Category::PseudoSelector => 3,
        }
    }
}

pub fn classify(line: &str) -> Option<Category> {
    if is_interpolation(line) {
        Some(Category::Interpolation)
    } else if is_plain(line) {
        Some(Category::Plain)
    } else if is_pseudo_selector(line) {
        Some(Category::PseudoSelector)
    } else {
        None
    }
}

/// `${` at the start, followed somewhere on the same line by `}`.
pub fn is_interpolation(line: &str) -> bool {
    line.strip_prefix("${")
        .map(|rest| first_line(rest).contains('}'))
        .unwrap_or(false)
}

pub fn is_plain(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_lowercase())
}

/// `&:` directly followed by a lowercase letter.
pub fn is_pseudo_selector(line: &str) -> bool {
    line.strip_prefix("&:")
        .map(|rest| rest.starts_with(|c: char| c.is_ascii_lowercase()))
        .unwrap_or(false)
}

pub fn has_vendor_prefix(line: &str) -> bool {
    VENDOR_PREFIXES.iter().any(|prefix| line.contains(prefix))
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}
