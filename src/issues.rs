//! Error types for extraction failures.
//!
//! Every failure is tied to the file it happened in and, when the parser or the
//! marker usage reports a position, to a location within that file. A failing
//! file yields no texts at all.

use std::fmt;

use crate::core::SourceLocation;

/// Why extraction of a file failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractErrorKind {
    /// A marker call whose arguments are not exactly one string literal,
    /// e.g. `a18n()`, `a18n("a", "b")`, `a18n(name)`.
    InvalidMarkerCall {
        marker: String,
        /// ESTree-style kinds of the received arguments (e.g. `Identifier`).
        received: Vec<&'static str>,
    },
    /// The source is not valid JavaScript/TypeScript.
    Syntax { message: String },
    /// The file could not be read.
    Read { message: String },
}

impl fmt::Display for ExtractErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractErrorKind::InvalidMarkerCall { marker, received } => {
                let received = if received.is_empty() {
                    "(no arguments)".to_string()
                } else {
                    received.join(", ")
                };
                write!(
                    f,
                    "{marker}() has signature {marker}(text: string), instead received: {received}"
                )
            }
            ExtractErrorKind::Syntax { message } => write!(f, "syntax error: {}", message),
            ExtractErrorKind::Read { message } => write!(f, "failed to read file: {}", message),
        }
    }
}

/// Failure to extract texts from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    pub path: String,
    pub location: Option<SourceLocation>,
    pub kind: ExtractErrorKind,
}

impl ExtractError {
    pub fn new(
        path: impl Into<String>,
        location: Option<SourceLocation>,
        kind: ExtractErrorKind,
    ) -> Self {
        Self {
            path: path.into(),
            location,
            kind,
        }
    }

    /// `path` or `path:line:column` when the location is known.
    pub fn position(&self) -> String {
        match self.location {
            Some(loc) => format!("{}:{}", self.path, loc),
            None => self.path.clone(),
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self.kind, ExtractErrorKind::Syntax { .. })
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position(), self.kind)
    }
}

impl std::error::Error for ExtractError {}
