//! Parameter, type and signature text for function-like declarations.

use swc_ecma_ast::{
    Pat, TsEntityName, TsFnOrConstructorType, TsKeywordTypeKind, TsType, TsTypeAnn,
    TsUnionOrIntersectionType,
};

use crate::core::skeleton::HocWrapper;

/// Placeholder for parameters or types that cannot be spelled out.
pub const UNKNOWN_PARAM: &str = "?";

/// Render a parameter list, comma separated.
///
/// - `id` / `id: T` for plain identifiers
/// - `id = ...` for defaulted parameters
/// - `...id` for rest parameters
/// - `{ ... }` / `[ ... ]` for destructuring patterns
pub fn render_params<'a>(params: impl IntoIterator<Item = &'a Pat>) -> String {
    params
        .into_iter()
        .map(render_param)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_param(pat: &Pat) -> String {
    match pat {
        Pat::Ident(binding) => match &binding.type_ann {
            Some(ann) => format!("{}: {}", binding.id.sym, type_name(&ann.type_ann)),
            None => binding.id.sym.to_string(),
        },
        Pat::Assign(assign) => match &*assign.left {
            Pat::Ident(binding) => format!("{} = ...", binding.id.sym),
            _ => UNKNOWN_PARAM.to_string(),
        },
        Pat::Rest(rest) => match &*rest.arg {
            Pat::Ident(binding) => format!("...{}", binding.id.sym),
            _ => "...args".to_string(),
        },
        Pat::Object(_) => "{ ... }".to_string(),
        Pat::Array(_) => "[ ... ]".to_string(),
        _ => UNKNOWN_PARAM.to_string(),
    }
}

/// Spell a TypeScript type using a small fixed vocabulary.
///
/// Keywords, arrays, simple references, unions and function types are
/// spelled out; everything else is `unknown`.
pub fn type_name(ty: &TsType) -> String {
    match ty {
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsStringKeyword => "string",
            TsKeywordTypeKind::TsNumberKeyword => "number",
            TsKeywordTypeKind::TsBooleanKeyword => "boolean",
            TsKeywordTypeKind::TsVoidKeyword => "void",
            TsKeywordTypeKind::TsAnyKeyword => "any",
            TsKeywordTypeKind::TsNullKeyword => "null",
            TsKeywordTypeKind::TsUndefinedKeyword => "undefined",
            _ => "unknown",
        }
        .to_string(),
        TsType::TsArrayType(array) => format!("{}[]", type_name(&array.elem_type)),
        TsType::TsTypeRef(type_ref) => match &type_ref.type_name {
            TsEntityName::Ident(ident) => ident.sym.to_string(),
            _ => "unknown".to_string(),
        },
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => union
            .types
            .iter()
            .map(|t| type_name(t))
            .collect::<Vec<_>>()
            .join(" | "),
        TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(_)) => {
            "(...) => ...".to_string()
        }
        TsType::TsParenthesizedType(paren) => type_name(&paren.type_ann),
        _ => "unknown".to_string(),
    }
}

/// `: T` for an annotated return type, empty otherwise.
pub fn return_suffix(return_type: Option<&TsTypeAnn>) -> String {
    return_type
        .map(|ann| format!(": {}", type_name(&ann.type_ann)))
        .unwrap_or_default()
}

fn async_prefix(is_async: bool) -> &'static str {
    if is_async { "async " } else { "" }
}

/// `async function load(id: string): Data`
pub fn function_signature(name: &str, is_async: bool, params: &str, ret: &str) -> String {
    format!("{}function {}({}){}", async_prefix(is_async), name, params, ret)
}

/// `const load = (id: string): Data => ...`
pub fn arrow_signature(name: &str, is_async: bool, params: &str, ret: &str) -> String {
    format!("{}const {} = ({}){} => ...", async_prefix(is_async), name, params, ret)
}

/// `const Input = forwardRef((props, ref) => ...)`
pub fn hoc_signature(name: &str, wrapper: HocWrapper, params: &str) -> String {
    format!("const {} = {}(({}) => ...)", name, wrapper.as_str(), params)
}

/// `const ThemeContext = createContext(...)`
pub fn context_signature(name: &str) -> String {
    format!("const {} = createContext(...)", name)
}
