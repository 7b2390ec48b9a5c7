//! Per-file sections of a compacted document.
//!
//! A compacted document is a sequence of blocks, each starting with a
//! `## <relative path>` line. Parsing splits on that header and keeps each
//! block's text verbatim, so concatenating the kept sections in order
//! reproduces those blocks byte for byte.

use std::path::Path;

use glob::Pattern;
use serde::Serialize;

use crate::{core::compact::SECTION_HEADER, utils::estimate_tokens};

/// Directory label for files at the document root.
pub const ROOT_DIR: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub path: String,
    /// Parent directory of `path`, or `/` for root-level files.
    pub dir: String,
    /// Header line plus body.
    pub content: String,
    pub tokens: usize,
}

pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut starts = vec![0];
    starts.extend(
        text.match_indices(&format!("\n{}", SECTION_HEADER))
            .map(|(idx, _)| idx + 1),
    );

    let mut sections = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        let part = &text[start..end];
        let part = part.strip_prefix(SECTION_HEADER).unwrap_or(part);
        if part.trim().is_empty() {
            continue;
        }

        let (path, body) = match part.split_once('\n') {
            Some((path, body)) => (path.trim(), body),
            None => (part.trim(), ""),
        };
        let content = format!("{}{}\n{}", SECTION_HEADER, path, body);

        sections.push(Section {
            path: path.to_string(),
            dir: parent_dir(path),
            tokens: estimate_tokens(&content),
            content,
        });
    }
    sections
}

fn parent_dir(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().to_string(),
        _ => ROOT_DIR.to_string(),
    }
}

/// Keep sections whose path matches any `only` pattern (all when empty) and
/// no `exclude` pattern. Order is preserved.
pub fn select_sections<'a>(
    sections: &'a [Section],
    only: &[Pattern],
    exclude: &[Pattern],
) -> Vec<&'a Section> {
    sections
        .iter()
        .filter(|s| only.is_empty() || only.iter().any(|p| p.matches(&s.path)))
        .filter(|s| !exclude.iter().any(|p| p.matches(&s.path)))
        .collect()
}
