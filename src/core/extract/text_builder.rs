use crate::core::{SourceLocation, SourceText, TextContext};

/// Source code split into lines for context lookup.
///
/// Lines are split on `\n`; a trailing `\r` is dropped so CRLF files yield the
/// same line text as LF files. A leading byte order mark is not part of line 1.
pub struct SourceLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            lines: code
                .strip_prefix('\u{feff}')
                .unwrap_or(code)
                .split('\n')
                .collect(),
        }
    }

    /// Text of a 1-indexed line. Line 0 and lines past the end yield `None`.
    pub fn get(&self, line: usize) -> Option<&'a str> {
        let index = line.checked_sub(1)?;
        self.lines
            .get(index)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Builds `SourceText` records with their context for one file.
pub struct TextBuilder<'a> {
    file_path: &'a str,
    lines: SourceLines<'a>,
}

impl<'a> TextBuilder<'a> {
    pub fn new(file_path: &'a str, code: &'a str) -> Self {
        Self {
            file_path,
            lines: SourceLines::new(code),
        }
    }

    pub fn static_text(&self, text: String, location: Option<SourceLocation>) -> SourceText {
        SourceText::Static {
            text,
            context: self.context(location),
        }
    }

    pub fn interpolated_text(
        &self,
        text_parts: Vec<String>,
        location: Option<SourceLocation>,
    ) -> SourceText {
        debug_assert!(!text_parts.is_empty(), "a template has at least one quasi");
        SourceText::Interpolated {
            text_parts,
            context: self.context(location),
        }
    }

    fn context(&self, location: Option<SourceLocation>) -> TextContext {
        TextContext {
            path: self.file_path.to_string(),
            line: location.map(|loc| loc.line),
            column: location.map(|loc| loc.column),
            text: location
                .and_then(|loc| self.lines.get(loc.line))
                .map(str::to_string),
        }
    }
}
