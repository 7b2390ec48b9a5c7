//! ECMAScript-family backend (JS, JSX, TS, TSX and their module variants).
//!
//! Parses with swc and walks the module once with [`EcmaAnalyzer`].

mod analyzer;
mod signature;


use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

pub use analyzer::{EcmaAnalysis, EcmaAnalyzer};
pub use signature::{render_params, type_name};

use super::Extract;
use crate::core::{
    parsers::jsx::parse_ecma_source,
    skeleton::{EcmaSkeleton, Signature, Skeleton},
};

/// Skeleton extractor for the ECMAScript family.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcmaExtractor;

impl Extract for EcmaExtractor {
    fn extract(&self, source: &str, file_path: &str) -> Option<Skeleton> {
        extract_ecma_skeleton(source, file_path).map(Skeleton::Ecma)
    }
}

/// Parse and analyze a source file.
///
/// `file_path` only selects the grammar (TypeScript for typed extensions).
pub fn analyze_ecma_source(source: &str, file_path: &str) -> Result<EcmaAnalysis> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_ecma_source(source.to_string(), file_path, source_map)?;
    Ok(EcmaAnalyzer::new(&parsed.source_map).analyze(&parsed.module))
}

/// Extract the skeleton, or `None` when the source cannot be parsed.
pub fn extract_ecma_skeleton(source: &str, file_path: &str) -> Option<EcmaSkeleton> {
    analyze_ecma_source(source, file_path)
        .ok()
        .map(|analysis| analysis.skeleton)
}

/// Signatures of functions, components and contexts, first declaration wins,
/// sorted by line. Empty when the source cannot be parsed.
pub fn extract_signatures(source: &str, file_path: &str) -> Vec<Signature> {
    analyze_ecma_source(source, file_path)
        .map(|analysis| analysis.signatures)
        .unwrap_or_default()
}
