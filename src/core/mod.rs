//! Core engine: classify, extract, render, aggregate.
//!
//! - `language`: extension-based classifier selecting a backend
//! - `skeleton`: fixed-shape skeleton records produced by every backend
//! - `parsers`: swc parser front-end
//! - `extract`: the `Extract` capability and its ECMAScript and Python backends
//! - `render`: per-backend text renderers
//! - `file_scanner`: project walk producing the files to compact
//! - `compact`: aggregation into one document plus statistics
//! - `sections`: splitting a compacted document back into per-file sections

pub mod compact;
pub mod extract;
pub mod file_scanner;
pub mod language;
pub mod parsers;
pub mod render;
pub mod sections;
pub mod skeleton;
