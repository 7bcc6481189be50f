use std::{
    collections::BTreeSet,
    fmt::Display,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files found, in path order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Paths excluded from a scan.
#[derive(Default)]
struct IgnoreSet {
    /// Literal paths, matched by prefix.
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(
        base_dir: &Path,
        ignore_patterns: &[String],
        ignore_test_files: bool,
        verbose: bool,
    ) -> Self {
        let mut set = Self::default();

        for p in ignore_patterns {
            if !is_glob_pattern(p) {
                set.prefixes.push(base_dir.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => set.globs.push(pattern),
                Err(e) => warn(verbose, format!("Invalid ignore pattern '{}': {}", p, e)),
            }
        }

        if ignore_test_files {
            set.globs.extend(
                TEST_FILE_PATTERNS
                    .iter()
                    .filter_map(|p| Pattern::new(p).ok()),
            );
        }

        set
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Collect JS/TS source files under `base_dir`.
///
/// `includes` narrows the scan to sub-directories (literal paths or glob patterns);
/// an empty list scans the whole `base_dir`. `ignore_patterns` drop paths either by
/// literal prefix or by glob.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base = Path::new(base_dir);
    let ignores = IgnoreSet::new(base, ignore_patterns, ignore_test_files, verbose);

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base, includes, verbose) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn(verbose, format!("Cannot access path: {}", e));
                    continue;
                }
            };

            let path = entry.path();
            if ignores.is_ignored(path) {
                continue;
            }
            if path.is_file() && is_scannable_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Directories to walk: `base` itself, or each existing include.
fn scan_roots(base: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let path = base.join(inc);
        if !is_glob_pattern(inc) {
            if path.exists() {
                roots.push(path);
            } else {
                warn(
                    verbose,
                    format!("Include path does not exist: {}", path.display()),
                );
            }
            continue;
        }

        match glob(&path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn(verbose, format!("Invalid glob pattern '{}': {}", inc, e)),
        }
    }
    roots
}

fn warn(verbose: bool, message: impl Display) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

fn is_scannable_file(path: &Path) -> bool {
    // Declaration files carry types only.
    let is_declaration = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".d.ts"));

    !is_declaration
        && matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("tsx" | "ts" | "mts" | "cts" | "jsx" | "js" | "mjs" | "cjs")
        )
}
