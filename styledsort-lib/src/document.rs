use crate::error::StyledSortError;
use std::ops::Range as ByteRange;
use std::path::Path;

pub mod text_document {
    use super::*;

    /// Languages whose sources may hold styled-components literals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Language {
        JavaScript,
        JavaScriptReact,
        TypeScript,
        TypeScriptReact,
    }

    impl Language {
        pub const ALL: [Language; 4] = [
            Language::JavaScript,
            Language::JavaScriptReact,
            Language::TypeScript,
            Language::TypeScriptReact,
        ];

        /// Looks up a supported language by its identifier.
        pub fn from_id(id: &str) -> Option<Self> {
            Self::ALL.into_iter().find(|language| language.id() == id)
        }

        /// Guesses the language from a file extension.
        pub fn from_path(path: &Path) -> Option<Self> {
            match path.extension()?.to_str()? {
                "js" | "mjs" | "cjs" => Some(Language::JavaScript),
                "jsx" => Some(Language::JavaScriptReact),
                "ts" | "mts" | "cts" => Some(Language::TypeScript),
                "tsx" => Some(Language::TypeScriptReact),
                _ => None,
            }
        }

        pub fn id(self) -> &'static str {
            match self {
                Language::JavaScript => "javascript",
                Language::JavaScriptReact => "javascriptreact",
                Language::TypeScript => "typescript",
                Language::TypeScriptReact => "typescriptreact",
            }
        }
    }

    /// Zero-based line and character of a text offset. Characters are counted
    /// in UTF-16 code units, the way editors address columns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
    pub struct Position {
        pub line: usize,
        pub character: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Range {
        pub start: Position,
        pub end: Position,
    }

    /// The full text of one source file and its language identifier.
    #[derive(Debug, Clone)]
    pub struct SourceDocument {
        pub language_id: String,
        pub text: String,
    }

    impl SourceDocument {
        pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
            SourceDocument {
                language_id: language_id.into(),
                text: text.into(),
            }
        }

        /// Builds a document for `path`, identifying the language from its
        /// extension. Unknown extensions get the `plaintext` identifier.
        pub fn for_path(path: &Path, text: impl Into<String>) -> Self {
            let language_id = Language::from_path(path)
                .map(Language::id)
                .unwrap_or("plaintext");
            SourceDocument::new(language_id, text)
        }

        pub fn language(&self) -> Option<Language> {
            Language::from_id(&self.language_id)
        }

        /// Maps a byte offset to a position. Offsets past the end clamp to the
        /// end of the text.
        pub fn position_at(&self, offset: usize) -> Position {
            let mut offset = offset.min(self.text.len());
            while !self.text.is_char_boundary(offset) {
                offset -= 1;
            }
            let before = &self.text[..offset];
            let line = before.matches('\n').count();
            let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
            Position {
                line,
                character: before[line_start..].encode_utf16().count(),
            }
        }

        /// Offset of the first character of the line after the one holding
        /// `offset`, or the text length when that line is the last.
        pub fn line_start_after(&self, offset: usize) -> usize {
            self.text
                .get(offset..)
                .and_then(|rest| rest.find('\n'))
                .map_or(self.text.len(), |pos| offset + pos + 1)
        }

        pub fn range_of(&self, span: &ByteRange<usize>) -> Range {
            Range {
                start: self.position_at(span.start),
                end: self.position_at(span.end),
            }
        }
    }

    /// Replacement of one byte span of a document.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TextEdit {
        pub span: ByteRange<usize>,
        pub range: Range,
        pub new_text: String,
    }

    /// Edits that are applied together or not at all.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct EditBatch {
        pub edits: Vec<TextEdit>,
    }

    impl EditBatch {
        pub fn new() -> Self {
            EditBatch { edits: Vec::new() }
        }

        pub fn replace(&mut self, document: &SourceDocument, span: ByteRange<usize>, new_text: String) {
            let range = document.range_of(&span);
            self.edits.push(TextEdit {
                span,
                range,
                new_text,
            });
        }

        pub fn is_empty(&self) -> bool {
            self.edits.is_empty()
        }

        pub fn len(&self) -> usize {
            self.edits.len()
        }

        /// Applies every edit to `text`. Nothing is applied if any edit is
        /// out of bounds, splits a character, or overlaps another edit.
        pub fn apply(&self, text: &str) -> Result<String, StyledSortError> {
            let mut ordered: Vec<&TextEdit> = self.edits.iter().collect();
            ordered.sort_by_key(|edit| (edit.span.start, edit.span.end));

            for edit in &ordered {
                let span = &edit.span;
                if span.start > span.end
                    || span.end > text.len()
                    || !text.is_char_boundary(span.start)
                    || !text.is_char_boundary(span.end)
                {
                    return Err(StyledSortError::EditOutOfBounds {
                        span: (span.start, span.end),
                        len: text.len(),
                    });
                }
            }
            for pair in ordered.windows(2) {
                let (first, second) = (&pair[0].span, &pair[1].span);
                if second.start < first.end {
                    return Err(StyledSortError::OverlappingEdits {
                        first: (first.start, first.end),
                        second: (second.start, second.end),
                    });
                }
            }

            let mut result = String::with_capacity(text.len());
            let mut cursor = 0;
            for edit in ordered {
                result.push_str(&text[cursor..edit.span.start]);
                result.push_str(&edit.new_text);
                cursor = edit.span.end;
            }
            result.push_str(&text[cursor..]);
            Ok(result)
        }
    }
}
