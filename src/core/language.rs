//! Language classification by file extension.
//!
//! Matching is suffix-based and case-sensitive: `App.TSX` is not recognized.

use serde::Serialize;

/// Extensions handled by the swc-based extractor.
pub const ECMA_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs", ".mts", ".cts"];

/// Extensions whose grammar needs TypeScript syntax enabled.
pub const TYPED_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".mts", ".cts"];

/// Extensions handled by the line-based Python extractor.
pub const PYTHON_EXTENSIONS: &[&str] = &[".py"];

/// Source language family, which decides the extraction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// `.js .jsx .mjs .cjs`
    JavaScript,
    /// `.ts .tsx .mts .cts`
    TypeScript,
    /// `.py`
    Python,
}

impl Language {
    /// Classify a path, or `None` when no backend handles it.
    pub fn from_path(path: &str) -> Option<Self> {
        if is_python_parseable(path) {
            Some(Language::Python)
        } else if is_typed_path(path) {
            Some(Language::TypeScript)
        } else if is_ecma_parseable(path) {
            Some(Language::JavaScript)
        } else {
            None
        }
    }

    pub fn is_ecma(self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }
}

pub fn is_ecma_parseable(path: &str) -> bool {
    ECMA_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

pub fn is_python_parseable(path: &str) -> bool {
    PYTHON_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// True for the typed ECMAScript variants.
pub fn is_typed_path(path: &str) -> bool {
    TYPED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// True when any backend can handle the path.
pub fn is_supported(path: &str) -> bool {
    Language::from_path(path).is_some()
}
