//! codebase-compact - structural skeletons of JS/TS/Python projects
//!
//! Walks a project, extracts a per-file skeleton (imports, exports,
//! components, functions, hooks, classes, types, constants) and renders all
//! of them into one dense document suitable for LLM prompts.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (compact, pick, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction backends, skeleton model, renderers and aggregation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
