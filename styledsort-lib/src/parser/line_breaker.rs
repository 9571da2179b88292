/// Inserts a newline after every character that ends a statement so the blob
/// can be split on `\n` afterwards.
///
/// * `{` breaks, unless it opens a `${` interpolation.
/// * `;` always breaks.
/// * `}` breaks, unless the next character is `;`. A `}` at the very end of
///   the input has no next character and therefore breaks.
pub fn insert_line_breaks(rules: &str) -> String {
    let mut result = String::with_capacity(rules.len() + rules.len() / 8);
    let mut prev: Option<char> = None;
    let mut chars = rules.chars().peekable();

    while let Some(ch) = chars.next() {
        result.push(ch);

        let breaks = match ch {
            '{' => prev != Some('$'),
            ';' => true,
            '}' => chars.peek() != Some(&';'),
            _ => false,
        };
        if breaks {
            result.push('\n');
        }
        prev = Some(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_breaks_after_statements() {
        assert_eq!(
            insert_line_breaks("color:red;&:hover{color:blue;}"),
            "color:red;\n&:hover{\ncolor:blue;\n}\n"
        );
    }

    #[test]
    fn test_interpolation_opener_does_not_break() {
        assert_eq!(
            insert_line_breaks("${theme.spacing}color:red;"),
            "${theme.spacing}\ncolor:red;\n"
        );
    }

    #[test]
    fn test_brace_before_semicolon_does_not_break() {
        assert_eq!(insert_line_breaks("${mixin};"), "${mixin};\n");
    }

    #[test]
    fn test_single_closing_brace_breaks() {
        assert_eq!(insert_line_breaks("}"), "}\n");
    }

    #[test]
    fn test_leading_brace_breaks() {
        assert_eq!(insert_line_breaks("{a"), "{\na");
    }

    #[test]
    fn test_other_text_passes_through() {
        assert_eq!(insert_line_breaks("  display: flex\n"), "  display: flex\n");
        assert_eq!(insert_line_breaks(""), "");
    }
}
