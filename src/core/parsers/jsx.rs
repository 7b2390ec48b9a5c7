use anyhow::{Result, anyhow};
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::language::is_typed_path;

pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Pick the grammar for a path.
///
/// JSX, decorators and `export v from` are always on. TypeScript syntax is
/// only enabled for the typed extensions; class properties, optional chaining
/// and nullish coalescing are part of the base grammar.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    if is_typed_path(file_path) {
        Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        })
    } else {
        Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            decorators_before_export: true,
            export_default_from: true,
            ..Default::default()
        })
    }
}

/// Parse ECMAScript-family source code into an AST.
///
/// Recoverable syntax errors are tolerated; an error the parser cannot
/// recover from is returned as `Err`.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_ecma_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedModule { module, source_map })
    })
}
