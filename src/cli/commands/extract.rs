use anyhow::Result;

use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::cli::args::ExtractCommand;
use crate::core::ExtractContext;

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ExtractContext::new(&cmd.common, &cmd.paths)?;
    let run = ctx.run();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            format: cmd.format,
            texts: run.source_texts(),
            file_count: run.file_count(),
            failed_files: run.failed_files().into_iter().map(String::from).collect(),
        }),
    })
}
