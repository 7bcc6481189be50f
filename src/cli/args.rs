//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract marker texts from source files
//! - `init`: Initialize tagtext configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Arguments shared by commands that read source files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory, also where the config search starts
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Marker identifier (overrides config file)
    #[arg(long, env = "TAGTEXT_MARKER")]
    pub marker: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of extracted texts on stdout
    #[default]
    Json,
    /// Human-readable listing with source context
    Text,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Files or directories to extract (default: scan the source root)
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable texts wrapped with the marker
    Extract(ExtractCommand),
    /// Initialize a new .tagtextrc.json configuration file
    Init,
}
