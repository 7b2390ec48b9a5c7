//! Skeleton data model.
//!
//! A skeleton is the structural summary of one source file. Both backends
//! always return a complete, fixed-shape record: categories with nothing in
//! them are empty collections or zero counts, never absent fields.
//!
//! Entities inside each category are kept in source-declaration order.

use serde::Serialize;

/// Structural summary of one file, tagged by the backend that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Skeleton {
    Ecma(EcmaSkeleton),
    Python(PythonSkeleton),
}

impl Skeleton {
    /// Total number of entities recorded, used for aggregate statistics.
    pub fn entity_count(&self) -> usize {
        match self {
            Skeleton::Ecma(s) => s.entity_count(),
            Skeleton::Python(s) => s.entity_count(),
        }
    }

    pub fn as_ecma(&self) -> Option<&EcmaSkeleton> {
        match self {
            Skeleton::Ecma(s) => Some(s),
            Skeleton::Python(_) => None,
        }
    }

    pub fn as_python(&self) -> Option<&PythonSkeleton> {
        match self {
            Skeleton::Python(s) => Some(s),
            Skeleton::Ecma(_) => None,
        }
    }
}

// ============================================================
// ECMAScript skeleton
// ============================================================

/// An `import` declaration.
///
/// Specifiers are rendered as the local name for default imports,
/// `* as name` for namespace imports, and the imported name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEntry {
    pub source: String,
    pub specifiers: Vec<String>,
}

impl ImportEntry {
    /// Relative imports (`./x`, `../x`) are local; everything else is external.
    pub fn is_local(&self) -> bool {
        self.source.starts_with('.')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportKind {
    Default,
    Named,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEntry {
    pub name: String,
    pub kind: ExportKind,
}

/// Higher-order component wrappers recognized on variable initializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HocWrapper {
    ForwardRef,
    Memo,
    Lazy,
}

impl HocWrapper {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "forwardRef" => Some(HocWrapper::ForwardRef),
            "memo" => Some(HocWrapper::Memo),
            "lazy" => Some(HocWrapper::Lazy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HocWrapper::ForwardRef => "forwardRef",
            HocWrapper::Memo => "memo",
            HocWrapper::Lazy => "lazy",
        }
    }
}

/// A PascalCase declaration, optionally wrapped in a higher-order component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub name: String,
    pub line: usize,
    pub wrapper: Option<HocWrapper>,
    pub signature: String,
}

/// A function-valued declaration whose name is not PascalCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntry {
    pub name: String,
    pub line: usize,
    pub signature: String,
}

/// A named declaration with its line (contexts, classes, interfaces, type aliases).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub name: String,
    pub line: usize,
}

/// Placeholder used for a dependency element that is neither an identifier
/// nor a plain member-access path.
pub const UNKNOWN_DEPENDENCY: &str = "?";

/// The second argument of a `useEffect` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectDependencies {
    /// No second argument: the effect runs on every render.
    Absent,
    /// An array literal, each element resolved to a name, a dotted path, or `?`.
    Array(Vec<String>),
    /// Present but not an array literal.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectCall {
    pub line: usize,
    pub dependencies: EffectDependencies,
}

/// Hook call-site statistics for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookUsage {
    pub use_state: usize,
    pub use_callback: usize,
    pub use_memo: usize,
    pub use_ref: usize,
    pub effects: Vec<EffectCall>,
    /// Distinct `use*` names that are not built-ins, in first-call order.
    pub custom: Vec<String>,
}

impl HookUsage {
    pub fn is_empty(&self) -> bool {
        self.use_state == 0
            && self.use_callback == 0
            && self.use_memo == 0
            && self.use_ref == 0
            && self.effects.is_empty()
            && self.custom.is_empty()
    }

    fn call_site_count(&self) -> usize {
        self.use_state + self.use_callback + self.use_memo + self.use_ref + self.effects.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcmaSkeleton {
    pub imports: Vec<ImportEntry>,
    pub exports: Vec<ExportEntry>,
    pub components: Vec<ComponentEntry>,
    pub functions: Vec<FunctionEntry>,
    pub contexts: Vec<Declaration>,
    pub hooks: HookUsage,
    /// Module-level variable declarations that are not functions,
    /// HOC calls or context creations.
    pub constants: usize,
    pub classes: Vec<Declaration>,
    pub interfaces: Vec<Declaration>,
    pub types: Vec<Declaration>,
}

impl EcmaSkeleton {
    pub fn entity_count(&self) -> usize {
        self.imports.len()
            + self.exports.len()
            + self.components.len()
            + self.functions.len()
            + self.contexts.len()
            + self.hooks.call_site_count()
            + self.hooks.custom.len()
            + self.constants
            + self.classes.len()
            + self.interfaces.len()
            + self.types.len()
    }
}

/// A declaration's one-line signature, used by the signature listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub name: String,
    pub signature: String,
    pub line: usize,
}

// ============================================================
// Python skeleton
// ============================================================

/// `import a` yields an empty `names`; `from a import b, c` lists `b`, `c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonImport {
    pub module: String,
    pub names: Vec<String>,
}

impl PythonImport {
    pub fn is_local(&self) -> bool {
        self.module.starts_with('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonFunction {
    pub name: String,
    pub line: usize,
    pub decorators: Vec<String>,
    /// Parameter list text, whitespace-collapsed but otherwise verbatim.
    pub params: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonClass {
    pub name: String,
    pub line: usize,
    pub decorators: Vec<String>,
    pub bases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonSkeleton {
    pub imports: Vec<PythonImport>,
    pub functions: Vec<PythonFunction>,
    pub classes: Vec<PythonClass>,
    /// Names of top-level assignment targets, in scan order.
    pub constants: Vec<String>,
}

impl PythonSkeleton {
    pub fn entity_count(&self) -> usize {
        self.imports.len() + self.functions.len() + self.classes.len() + self.constants.len()
    }
}
