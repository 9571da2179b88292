//! Finds tagged template literals that hold style rules.
//!
//! A rule blob is the body of a template literal tagged with
//! `styled.<tag>`, `css` or `styled(<component>)`:
//!
//! ```text
//! const Button = styled.button`
//!     color: red;
//! `;
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Tag expression, opening backtick, body without backticks, closing backtick.
/// The tag never crosses a backtick or a line end.
static RULE_BLOB_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(styled\.[^`\n]+|css|styled\([^`\n]+\))`([^`]+)`").unwrap());

/// One tagged template literal found in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlob<'a> {
    /// The literal body between the backticks.
    pub body: &'a str,
    /// Byte span of the whole match, tag expression through closing backtick.
    pub span: Range<usize>,
    /// Byte span of `body`.
    pub body_span: Range<usize>,
}

impl RuleBlob<'_> {
    /// Byte offset of the closing backtick.
    pub fn closing_backtick(&self) -> usize {
        self.span.end - 1
    }
}

/// Returns every rule blob of `text`, in source order.
pub fn locate_rule_blobs(text: &str) -> Vec<RuleBlob<'_>> {
    RULE_BLOB_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(2)?;
            Some(RuleBlob {
                body: body.as_str(),
                span: whole.range(),
                body_span: body.range(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_styled_member_tag() {
        let source = "const A = styled.div`\n  color: red;\n`;\n";
        let blobs = locate_rule_blobs(source);
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].body, "\n  color: red;\n");
        assert_eq!(&source[blobs[0].span.clone()], "styled.div`\n  color: red;\n`");
        assert_eq!(&source[blobs[0].closing_backtick()..], "`;\n");
    }

    #[test]
    fn test_css_and_call_tags() {
        let source = "const m = css`a: b;`;\nconst L = styled(Link)`c: d;`;\n";
        let bodies: Vec<&str> = locate_rule_blobs(source).iter().map(|b| b.body).collect();
        assert_eq!(bodies, vec!["a: b;", "c: d;"]);
    }

    #[test]
    fn test_untagged_literals_are_ignored() {
        let source = "const s = `color: red;`;\nconst t = html`<p></p>`;\n";
        assert!(locate_rule_blobs(source).is_empty());
    }

    #[test]
    fn test_generic_and_attrs_tags() {
        let source = "const A = styled.div<{ a: boolean }>`\n  z-index: 1;\n`;\n\
                      const I = styled.input.attrs({ type: 'text' })`\n  color: red;\n`;\n";
        let blobs = locate_rule_blobs(source);
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0].body, "\n  z-index: 1;\n");
        assert_eq!(blobs[1].body, "\n  color: red;\n");
        assert!(source[blobs[0].span.clone()].starts_with("styled.div<{ a: boolean }>`"));
        assert!(source[blobs[1].span.clone()].starts_with("styled.input.attrs({ type: 'text' })`"));
    }

    #[test]
    fn test_multiple_blobs_in_order() {
        let source = "styled.a`x: 1;`\nstyled.b`y: 2;`\n";
        let blobs = locate_rule_blobs(source);
        assert_eq!(blobs.len(), 2);
        assert!(blobs[0].span.end <= blobs[1].span.start);
        assert_eq!(blobs[0].body, "x: 1;");
        assert_eq!(blobs[1].body, "y: 2;");
    }
}
