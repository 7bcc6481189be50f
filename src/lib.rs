//! Tagtext - translatable text extractor for JavaScript and TypeScript
//!
//! Tagtext finds texts wrapped with a marker identifier, either as a call with
//! a single string literal (`a18n("Save")`) or as a tagged template
//! (`` a18n`Hello ${name}` ``), and reports them with their source location.
//! Marker calls with any other argument shape fail the file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parsing, marker recognition, file orchestration)
//! - `issues`: Extraction error types

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
