//! Aggregation: read, classify, extract and render a set of files.
//!
//! Files are processed independently (in parallel with rayon) and sorted by
//! relative path before rendering, so the output does not depend on input or
//! scheduling order. A file that cannot be read is skipped; a file that
//! cannot be parsed or classified still gets its `## path` header with an
//! empty body.

use std::path::Path;

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    core::{
        extract::{Extract, Extractor, analyze_ecma_source},
        file_scanner::{ScanOptions, SourceEntry, collect_files},
        language::Language,
        render::{render_signatures, render_skeleton},
        skeleton::{Signature, Skeleton},
    },
    utils::estimate_tokens,
};

/// Prefix of every per-file block in the rendered output.
pub const SECTION_HEADER: &str = "## ";

/// Skeleton and rendered block of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactedFile {
    pub skeleton: Option<Skeleton>,
    pub rendered: String,
}

/// Extract and render one file's content.
///
/// Unsupported paths and unparseable sources yield no skeleton and an empty
/// rendering.
pub fn compact_file(file_path: &str, content: &str) -> CompactedFile {
    let skeleton =
        Extractor::for_path(file_path).and_then(|extractor| extractor.extract(content, file_path));
    let rendered = skeleton.as_ref().map(render_skeleton).unwrap_or_default();
    CompactedFile { skeleton, rendered }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSkeleton {
    pub relative_path: String,
    /// `None` for files no backend handles.
    pub language: Option<Language>,
    /// `None` when the source could not be parsed or classified.
    pub skeleton: Option<Skeleton>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Signature>,
    #[serde(skip)]
    pub raw_tokens: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactStats {
    /// Files successfully read.
    pub files: usize,
    pub raw_tokens: usize,
    pub compacted_tokens: usize,
    /// Total skeleton entities across all files.
    pub entities: usize,
    /// ECMAScript files whose parse failed.
    pub unparsed: usize,
    /// Files that could not be read or accessed.
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactResult {
    pub output: String,
    pub stats: CompactStats,
    pub files: Vec<FileSkeleton>,
}

#[derive(Debug, Clone, Default)]
pub struct CompactOptions {
    pub scan: ScanOptions,
    /// Append each ECMAScript file's signature listing after its skeleton.
    pub signatures: bool,
    pub verbose: bool,
}

/// Compact every supported file under `root`.
pub fn compact_project(root: &Path, options: &CompactOptions) -> CompactResult {
    let scan = collect_files(root, &options.scan);
    let mut result = compact_files(&scan.files, options);
    result.stats.skipped += scan.skipped_count;
    result
}

/// Compact an explicit set of files.
pub fn compact_files(entries: &[SourceEntry], options: &CompactOptions) -> CompactResult {
    let read_results: Vec<_> = entries
        .par_iter()
        .map(|entry| {
            let result = std::fs::read_to_string(&entry.absolute_path)
                .map(|content| analyze_file(&entry.relative_path, &content, options.signatures));
            (entry, result)
        })
        .collect();

    let mut files = Vec::with_capacity(read_results.len());
    let mut stats = CompactStats::default();

    for (entry, result) in read_results {
        match result {
            Ok(file) => {
                if file.language.is_none() && options.verbose {
                    eprintln!(
                        "{} Unsupported file type: {}",
                        "warning:".bold().yellow(),
                        entry.relative_path
                    );
                }
                if file.skeleton.is_none() && file.language.is_some_and(Language::is_ecma) {
                    stats.unparsed += 1;
                    if options.verbose {
                        eprintln!(
                            "{} Failed to parse {}, section left empty",
                            "warning:".bold().yellow(),
                            entry.relative_path
                        );
                    }
                }
                files.push(file);
            }
            Err(e) => {
                stats.skipped += 1;
                if options.verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        entry.relative_path,
                        e
                    );
                }
            }
        }
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    let output = render_output(&files);
    stats.files = files.len();
    stats.raw_tokens = files.iter().map(|f| f.raw_tokens).sum();
    stats.compacted_tokens = estimate_tokens(&output);
    stats.entities = files
        .iter()
        .filter_map(|f| f.skeleton.as_ref())
        .map(Skeleton::entity_count)
        .sum();

    CompactResult {
        output,
        stats,
        files,
    }
}

fn analyze_file(relative_path: &str, content: &str, with_signatures: bool) -> FileSkeleton {
    let language = Language::from_path(relative_path);
    let (skeleton, signatures) = match language {
        // Skeleton and signatures from a single parse.
        Some(language) if language.is_ecma() && with_signatures => {
            match analyze_ecma_source(content, relative_path) {
                Ok(analysis) => (Some(Skeleton::Ecma(analysis.skeleton)), analysis.signatures),
                Err(_) => (None, Vec::new()),
            }
        }
        Some(language) => (
            Extractor::for_language(language).extract(content, relative_path),
            Vec::new(),
        ),
        None => (None, Vec::new()),
    };

    FileSkeleton {
        relative_path: relative_path.to_string(),
        language,
        skeleton,
        signatures,
        raw_tokens: estimate_tokens(content),
    }
}

/// Concatenate per-file blocks in the given order.
///
/// Each block is `## <relative path>` followed by the rendered skeleton (if
/// non-empty) and the signature listing (if any).
pub fn render_output(files: &[FileSkeleton]) -> String {
    let mut lines = Vec::new();

    for file in files {
        lines.push(format!("{}{}", SECTION_HEADER, file.relative_path));

        if let Some(skeleton) = &file.skeleton {
            let rendered = render_skeleton(skeleton);
            if !rendered.is_empty() {
                lines.push(rendered);
            }
        }

        if !file.signatures.is_empty() {
            lines.push(render_signatures(&file.signatures));
        }
    }

    lines.join("\n")
}
