//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `context`: Run configuration and parallel multi-file extraction
//! - `data`: Extracted text records and source positions
//! - `extract`: Marker recognition, validation and record building
//! - `file_scanner`: Source file discovery
//! - `parsers`: swc-based source parsing

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use context::{ExtractContext, ExtractionRun, FileExtraction};
pub use data::{SourceLocation, SourceText, TextContext};
pub use extract::{FileOutcome, extract_code, extract_file};
