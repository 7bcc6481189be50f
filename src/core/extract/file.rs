use std::{
    fs,
    io::{self, Write},
    sync::Arc,
};

use colored::Colorize;
use serde::{Serialize, Serializer, ser::SerializeStruct};
use swc_common::SourceMap;

use super::MarkerVisitor;
use crate::core::{SourceText, parsers::parse_source};
use crate::issues::{ExtractError, ExtractErrorKind};

/// Extract all marker texts from a source string.
///
/// `file_path` only labels the results (and picks the parser syntax by extension);
/// nothing is read from disk. Texts come back in source order. Any invalid
/// marker call or syntax error fails the whole file.
pub fn extract_code(
    code: &str,
    file_path: &str,
    marker: &str,
) -> Result<Vec<SourceText>, ExtractError> {
    let parsed = parse_source(code.to_string(), file_path, Arc::new(SourceMap::default()))?;
    let mut visitor = MarkerVisitor::new(marker, file_path, &parsed, code);
    parsed.visit_with(&mut visitor);
    visitor.finish()
}

/// Result of extracting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Extracted(Vec<SourceText>),
    /// The failure was already reported; nothing from the file is kept.
    Failed,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, FileOutcome::Extracted(_))
    }

    pub fn source_texts(&self) -> Option<&[SourceText]> {
        match self {
            FileOutcome::Extracted(texts) => Some(texts),
            FileOutcome::Failed => None,
        }
    }

    pub fn into_source_texts(self) -> Option<Vec<SourceText>> {
        match self {
            FileOutcome::Extracted(texts) => Some(texts),
            FileOutcome::Failed => None,
        }
    }
}

/// Serialized as `{"ok":true,"sourceTexts":[...]}` or `{"ok":false}`.
impl Serialize for FileOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FileOutcome::Extracted(texts) => {
                let mut state = serializer.serialize_struct("FileOutcome", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("sourceTexts", texts)?;
                state.end()
            }
            FileOutcome::Failed => {
                let mut state = serializer.serialize_struct("FileOutcome", 1)?;
                state.serialize_field("ok", &false)?;
                state.end()
            }
        }
    }
}

/// Read and extract one file, reporting failures to stderr.
pub fn extract_file(file_path: &str, marker: &str) -> FileOutcome {
    extract_file_to(file_path, marker, &mut io::stderr().lock())
}

/// Read and extract one file, reporting failures to a custom writer.
pub fn extract_file_to<W: Write>(file_path: &str, marker: &str, writer: &mut W) -> FileOutcome {
    match read_and_extract(file_path, marker) {
        Ok(texts) => FileOutcome::Extracted(texts),
        Err(err) => {
            report_failure_to(&err, writer);
            FileOutcome::Failed
        }
    }
}

fn read_and_extract(file_path: &str, marker: &str) -> Result<Vec<SourceText>, ExtractError> {
    let code = fs::read_to_string(file_path).map_err(|e| {
        ExtractError::new(
            file_path,
            None,
            ExtractErrorKind::Read {
                message: e.to_string(),
            },
        )
    })?;
    extract_code(&code, file_path, marker)
}

/// Two-line failure diagnostic: where it failed, then the error itself.
pub fn report_failure_to<W: Write>(err: &ExtractError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} failed to extract texts from {}",
        "error:".bold().red(),
        err.position()
    );
    let _ = writeln!(writer, "{}", err);
}
