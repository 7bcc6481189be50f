use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config, validate_marker},
    core::{
        SourceText,
        extract::{FileOutcome, extract_file},
        file_scanner::scan_files,
    },
};

/// Outcome of extracting a single file, tagged with its path.
#[derive(Debug)]
pub struct FileExtraction {
    pub file_path: String,
    pub outcome: FileOutcome,
}

/// Results of an extraction run over many files, in file path order.
#[derive(Debug, Default)]
pub struct ExtractionRun {
    pub files: Vec<FileExtraction>,
}

impl ExtractionRun {
    /// Texts of all successful files, grouped by file, traversal order within a file.
    pub fn source_texts(&self) -> Vec<SourceText> {
        self.files
            .iter()
            .filter_map(|f| f.outcome.source_texts())
            .flatten()
            .cloned()
            .collect()
    }

    pub fn failed_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| !f.outcome.is_ok())
            .map(|f| f.file_path.as_str())
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Resolved settings and file list for an extraction run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--marker`, or the `TAGTEXT_MARKER` environment variable)
/// 2. `.tagtextrc.json`, searched from the source root upwards
/// 3. Built-in defaults
pub struct ExtractContext {
    pub config: Config,
    /// Directory scanned when no explicit paths are given.
    pub root_dir: PathBuf,
    /// Source files to extract, in path order.
    pub files: BTreeSet<String>,
    pub verbose: bool,
}

impl ExtractContext {
    /// Load configuration and collect the files to extract.
    ///
    /// With no `paths`, the source root is scanned using the configured includes
    /// and ignores. Explicit file paths are taken as-is; explicit directories are
    /// scanned with the configured ignores.
    pub fn new(common_args: &CommonArgs, paths: &[PathBuf]) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let root = root_dir
            .to_str()
            .with_context(|| format!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(root))?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .tagtextrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref marker) = common_args.marker {
            validate_marker(marker)?;
            config.marker = marker.clone();
        }

        let mut files = BTreeSet::new();
        let mut skipped_count = 0;

        if paths.is_empty() {
            let scan = scan_files(
                root,
                &config.includes,
                &config.ignores,
                config.ignore_test_files,
                verbose,
            );
            files.extend(scan.files);
            skipped_count += scan.skipped_count;
        } else {
            for path in paths {
                if path.is_dir() {
                    let dir = path
                        .to_str()
                        .with_context(|| format!("Invalid path: {:?}", path))?;
                    let scan = scan_files(
                        dir,
                        &[],
                        &config.ignores,
                        config.ignore_test_files,
                        verbose,
                    );
                    files.extend(scan.files);
                    skipped_count += scan.skipped_count;
                } else if path.is_file() {
                    files.insert(path.to_string_lossy().into_owned());
                } else {
                    bail!("Path does not exist: {}", path.display());
                }
            }
        }

        if skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files,
            verbose,
        })
    }

    /// Extract every file in parallel.
    ///
    /// Each file is parsed and walked independently; a failing file is reported
    /// on stderr and does not affect the others.
    pub fn run(&self) -> ExtractionRun {
        let marker = self.config.marker.as_str();

        let files: Vec<FileExtraction> = self
            .files
            .par_iter()
            .map(|file_path| FileExtraction {
                file_path: file_path.clone(),
                outcome: extract_file(file_path, marker),
            })
            .collect();

        if self.verbose {
            for file in &files {
                if let Some(texts) = file.outcome.source_texts() {
                    eprintln!("Extracted {} text(s) from {}", texts.len(), file.file_path);
                }
            }
        }

        ExtractionRun { files }
    }
}
