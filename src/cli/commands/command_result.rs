use crate::cli::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::SourceText;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub format: OutputFormat,
    /// Texts from all successfully extracted files.
    pub texts: Vec<SourceText>,
    pub file_count: usize,
    /// Files that failed; their diagnostics were already printed.
    pub failed_files: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: String,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running a tagtext command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn failure_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Extract(summary) => summary.failed_files.len(),
            CommandSummary::Init(summary) => usize::from(summary.error.is_some()),
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.failure_count() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
