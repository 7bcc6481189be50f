//! Output formatting for command results.
//!
//! Extracted texts go to stdout (JSON or a cargo-style listing); summaries,
//! notes and failures go to stderr so that stdout stays machine-readable.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::core::SourceText;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_texts(summary)?;
            print_extract_summary_to(summary, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

fn print_texts(summary: &ExtractSummary) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match summary.format {
        OutputFormat::Json => write_json_to(&summary.texts, &mut stdout),
        OutputFormat::Text => {
            report_texts_to(&summary.texts, &mut stdout);
            Ok(())
        }
    }
}

/// Write texts as a pretty-printed JSON array.
pub fn write_json_to<W: Write>(texts: &[SourceText], writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, texts).context("Failed to serialize texts")?;
    writeln!(writer).context("Failed to write output")?;
    Ok(())
}

/// Print texts in cargo-style format:
///
/// ```text
/// "Save changes"  string
///   --> src/app.ts:3:10
///   |
/// 3 | const s = a18n("Save changes");
///   |           ^
/// ```
pub fn report_texts_to<W: Write>(texts: &[SourceText], writer: &mut W) {
    let max_line_width = texts
        .iter()
        .filter_map(|t| t.context().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for text in texts {
        print_text(text, writer, max_line_width);
    }
}

fn print_text<W: Write>(text: &SourceText, writer: &mut W, max_line_width: usize) {
    let kind = match text {
        SourceText::Static { .. } => "string",
        SourceText::Interpolated { .. } => "interpolated",
    };
    let _ = writeln!(
        writer,
        "{}  {}",
        format!("{:?}", text.display_text()).bold(),
        kind.dimmed().cyan()
    );

    let context = text.context();
    let Some(location) = context.location() else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), context.path);
        let _ = writeln!(writer);
        return;
    };

    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        context.path,
        location.line,
        location.column
    );

    if let Some(source_line) = &context.text {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            location.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Column is 0-based, counted in characters.
        let prefix: String = source_line.chars().take(location.column).collect();
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            "^".green(),
            width = max_line_width,
            padding = UnicodeWidthStr::width(prefix.as_str())
        );
    }

    let _ = writeln!(writer);
}

/// Print the one-line run summary.
pub fn print_extract_summary_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let text_count = summary.texts.len();
    let texts = if text_count == 1 { "text" } else { "texts" };
    let files = if summary.file_count == 1 {
        "file"
    } else {
        "files"
    };

    if summary.failed_files.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Extracted {} {} from {} {}",
                text_count, texts, summary.file_count, files
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} of {} {} failed, extracted {} {} from the rest",
            FAILURE_MARK.red(),
            summary.failed_files.len().to_string().red(),
            summary.file_count,
            files,
            text_count,
            texts
        );
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", "error:".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.config_path).green()
        ),
    }
}
