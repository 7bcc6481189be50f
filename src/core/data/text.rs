use serde::{Deserialize, Serialize};

use super::SourceLocation;

/// Positional metadata attached to every extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContext {
    /// Path of the source file, as given to the extractor.
    pub path: String,
    /// Start line of the marker usage (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Start column of the marker usage (0-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    /// Full text of the line the marker usage starts on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TextContext {
    pub fn location(&self) -> Option<SourceLocation> {
        match (self.line, self.column) {
            (Some(line), Some(column)) => Some(SourceLocation::new(line, column)),
            _ => None,
        }
    }
}

/// A piece of translatable text found in source code.
///
/// Serialized in the catalog input format:
///
/// ```json
/// { "type": "string", "text": "Hello", "context": { "path": "a.ts", "line": 1, "column": 0 } }
/// { "type": "interpolated", "textParts": ["Hi ", "!"], "context": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceText {
    /// Argument of a marker call: `a18n("Hello")`.
    /// The text is the decoded string literal value.
    #[serde(rename = "string")]
    Static { text: String, context: TextContext },

    /// Literal parts of a marker-tagged template: ``a18n`Hi ${name}!` ``.
    /// Parts keep their raw form (escape sequences are not decoded, line endings
    /// become `\n`). There is always at least one part.
    #[serde(rename = "interpolated", rename_all = "camelCase")]
    Interpolated {
        text_parts: Vec<String>,
        context: TextContext,
    },
}

impl SourceText {
    pub fn context(&self) -> &TextContext {
        match self {
            SourceText::Static { context, .. } => context,
            SourceText::Interpolated { context, .. } => context,
        }
    }

    /// Human-readable form used in listings; interpolation points are shown as `${}`.
    pub fn display_text(&self) -> String {
        match self {
            SourceText::Static { text, .. } => text.clone(),
            SourceText::Interpolated { text_parts, .. } => text_parts.join("${}"),
        }
    }
}
