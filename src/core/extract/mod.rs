//! Extraction of marker texts from source files.
//!
//! A file is parsed once, walked once by `MarkerVisitor`, and either yields all
//! of its texts or fails as a whole.

pub mod file;
pub mod marker_visitor;
pub mod text_builder;


pub use file::{FileOutcome, extract_code, extract_file, extract_file_to, report_failure_to};
pub use marker_visitor::MarkerVisitor;
pub use text_builder::{SourceLines, TextBuilder};
