//! Skeleton extraction backends.
//!
//! Both backends implement the same [`Extract`] capability and are selected
//! through the [`Extractor`] tagged variant, chosen by the language classifier:
//!
//! - `ecma`: swc syntax-tree extractor for JS/TS (may fail on fatal syntax errors)
//! - `python`: line-heuristic extractor for Python (never fails)

pub mod ecma;
pub mod python;

use enum_dispatch::enum_dispatch;

pub use ecma::{EcmaExtractor, analyze_ecma_source, extract_ecma_skeleton, extract_signatures};
pub use python::{PythonExtractor, extract_python_skeleton};

use crate::core::{language::Language, skeleton::Skeleton};

/// Capability shared by every extraction backend.
///
/// Implementations never panic or propagate errors: a file that cannot be
/// understood yields `None` (or an empty skeleton).
#[enum_dispatch]
pub trait Extract {
    /// Extract the skeleton of `source`. `file_path` may select a grammar variant.
    fn extract(&self, source: &str, file_path: &str) -> Option<Skeleton>;
}

/// Backend selected for a file.
#[enum_dispatch(Extract)]
#[derive(Debug, Clone, Copy)]
pub enum Extractor {
    Ecma(EcmaExtractor),
    Python(PythonExtractor),
}

impl Extractor {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::JavaScript | Language::TypeScript => EcmaExtractor.into(),
            Language::Python => PythonExtractor.into(),
        }
    }

    /// Backend for a path, or `None` for unsupported files.
    pub fn for_path(path: &str) -> Option<Self> {
        Language::from_path(path).map(Self::for_language)
    }
}
