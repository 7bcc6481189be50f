//! Core data types produced by extraction.
//!
//! ## Module Structure
//!
//! - `source`: Source position type (SourceLocation)
//! - `text`: Extracted text records (SourceText, TextContext)

pub mod source;
pub mod text;

pub use source::SourceLocation;
pub use text::{SourceText, TextContext};
