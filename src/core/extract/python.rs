//! Line-heuristic Python backend.
//!
//! There is no tokenizer here: the scanner walks physical lines once and
//! matches a handful of patterns against top-level (unindented) lines only.
//! Decorator arguments, nested parentheses in multi-line parameter lists,
//! multi-line class base lists and strings containing `#` or `=` can
//! misparse; each such line degrades on its own without affecting others.

use std::sync::LazyLock;

use regex::Regex;

use super::Extract;
use crate::core::skeleton::{PythonClass, PythonFunction, PythonImport, PythonSkeleton, Skeleton};

static DECORATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@(\w[\w.]*)").unwrap());

static IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\s+(.+)").unwrap());

static FROM_IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^from\s+([\w.]+)\s+import\s+(.+)").unwrap());

static DEF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:async\s+)?def\s+(\w+)\s*\((.*)").unwrap());

static CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^class\s+(\w+)\s*(?:\(([^)]*)\))?\s*:").unwrap());

static ASSIGN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_]\w*)\s*[=:]").unwrap());

static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+as\s+").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Keywords that open a block (`else:`, `try:`) and would otherwise look
/// like annotated assignments.
const BLOCK_KEYWORDS: &[&str] = &[
    "else", "try", "finally", "except", "if", "elif", "while", "for", "with", "match", "case",
    "lambda", "async",
];

/// Skeleton extractor for Python. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl Extract for PythonExtractor {
    fn extract(&self, source: &str, _file_path: &str) -> Option<Skeleton> {
        Some(Skeleton::Python(extract_python_skeleton(source)))
    }
}

/// Scan Python source and collect top-level imports, functions, classes and
/// assignment targets.
pub fn extract_python_skeleton(source: &str) -> PythonSkeleton {
    let lines: Vec<&str> = source.lines().collect();
    let mut skeleton = PythonSkeleton::default();
    let mut pending_decorators: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let line_number = i + 1;
        i += 1;

        // Blank lines and comments keep pending decorators
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Indented lines belong to some block: top-level only
        if line.starts_with(char::is_whitespace) {
            pending_decorators.clear();
            continue;
        }

        if let Some(caps) = DECORATOR_REGEX.captures(line) {
            pending_decorators.push(caps[1].to_string());
            continue;
        }

        if let Some(caps) = IMPORT_REGEX.captures(line) {
            for module in caps[1].split(',') {
                skeleton.imports.push(PythonImport {
                    module: strip_alias(module),
                    names: Vec::new(),
                });
            }
            pending_decorators.clear();
            continue;
        }

        if let Some(caps) = FROM_IMPORT_REGEX.captures(line) {
            let module = caps[1].to_string();
            let mut names_text = caps[2].trim().to_string();

            if let Some(rest) = names_text.strip_prefix('(') {
                names_text = rest.to_string();
                while !names_text.contains(')') && i < lines.len() {
                    names_text.push(' ');
                    names_text.push_str(lines[i].trim());
                    i += 1;
                }
                names_text = names_text.replacen(')', "", 1);
            }

            let names = names_text
                .split(',')
                .map(strip_alias)
                .filter(|name| !name.is_empty())
                .collect();

            skeleton.imports.push(PythonImport { module, names });
            pending_decorators.clear();
            continue;
        }

        if let Some(caps) = DEF_REGEX.captures(line) {
            let name = caps[1].to_string();
            let rest = caps.get(2).map_or("", |m| m.as_str());

            let raw_params = match rest.split_once(')') {
                Some((params, _)) => params.to_string(),
                None => {
                    // Naive continuation: join lines until one contains `)`,
                    // then cut at its first `)`. Nested parentheses truncate early.
                    // The joined lines are still scanned on their own.
                    let mut params = rest.to_string();
                    for next in &lines[i..] {
                        params.push(' ');
                        match next.split_once(')') {
                            Some((head, _)) => {
                                params.push_str(head.trim());
                                break;
                            }
                            None => params.push_str(next.trim()),
                        }
                    }
                    params
                }
            };

            skeleton.functions.push(PythonFunction {
                name,
                line: line_number,
                decorators: std::mem::take(&mut pending_decorators),
                params: collapse_whitespace(&raw_params),
            });
            continue;
        }

        if let Some(caps) = CLASS_REGEX.captures(line) {
            let bases = caps
                .get(2)
                .map(|m| {
                    m.as_str()
                        .split(',')
                        .map(|base| base.trim().to_string())
                        .filter(|base| !base.is_empty())
                        .collect()
                })
                .unwrap_or_default();

            skeleton.classes.push(PythonClass {
                name: caps[1].to_string(),
                line: line_number,
                decorators: std::mem::take(&mut pending_decorators),
                bases,
            });
            continue;
        }

        if let Some(caps) = ASSIGN_REGEX.captures(line)
            && !BLOCK_KEYWORDS.contains(&&caps[1])
        {
            skeleton.constants.push(caps[1].to_string());
            pending_decorators.clear();
            continue;
        }

        // Any other top-level statement ends a decorator run
        pending_decorators.clear();
    }

    skeleton
}

/// `numpy as np` → `numpy`
fn strip_alias(item: &str) -> String {
    let item = item.trim();
    ALIAS_REGEX
        .split(item)
        .next()
        .unwrap_or(item)
        .trim()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
