//! Source file parsing.
//!
//! - `source`: JS/JSX/TS/TSX parser (uses swc for AST generation)

pub mod source;

pub use source::{ParsedSource, parse_source, span_location, syntax_for_path};
