use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::{config::TEST_FILE_PATTERNS, core::language::is_supported};

/// Directory names never descended into.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    ".git",
    "target",
    "build",
    ".next",
    ".turbo",
    "out",
    "coverage",
    ".cache",
    "__pycache__",
    ".venv",
    "venv",
    ".idea",
    ".vscode",
];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal relative paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A classifiable source file found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub absolute_path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative_path: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub ignores: Vec<String>,
    /// Extra directory names to skip, merged with [`SKIP_DIRS`].
    pub skip_dirs: Vec<String>,
    pub ignore_test_files: bool,
    pub verbose: bool,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Entries in walk order (sorted by file name within each directory).
    pub files: Vec<SourceEntry>,
    /// Entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

pub fn collect_files(root: &Path, options: &ScanOptions) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<&str> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in &options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if options.verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(p.trim_start_matches("./").trim_end_matches('/'));
        }
    }

    if options.ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry, &options.skip_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(relative_path) = relative_path(root, entry.path()) else {
            continue;
        };

        if !is_supported(&relative_path) {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore| Path::new(&relative_path).starts_with(ignore))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&relative_path)) {
            continue;
        }

        files.push(SourceEntry {
            absolute_path: entry.path().to_path_buf(),
            relative_path,
        });
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Built-in skip set, configured names, or any dot-prefixed directory.
fn is_skipped_dir(entry: &DirEntry, extra: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let name: &str = &name;
    name.starts_with('.') || SKIP_DIRS.contains(&name) || extra.iter().any(|d| d == name)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
