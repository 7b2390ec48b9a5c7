//! Single-pass skeleton analyzer for ECMAScript-family modules.
//!
//! One `swc_ecma_visit::Visit` traversal collects imports, exports,
//! component/function declarations, hook call-sites, classes, interfaces,
//! type aliases and context declarations.
//!
//! Naming policy: a declared name is a component if and only if it is
//! PascalCase (see [`is_pascal_case`]). JSX usage is never inspected.
//!
//! Duplicate names across components, functions and contexts are recorded
//! once; the first declaration seen wins.

use std::collections::HashSet;

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    ArrowExpr, CallExpr, Callee, ClassDecl, Constructor, Decl, DefaultDecl, ExportDecl,
    ExportDefaultDecl, ExportDefaultExpr, ExportSpecifier, Expr, ExprOrSpread, FnDecl, Function,
    GetterProp, ImportDecl, ImportSpecifier, MemberExpr, MemberProp, Module, ModuleExportName,
    NamedExport, Pat, SetterProp, StaticBlock, TsInterfaceDecl, TsModuleDecl, TsTypeAliasDecl,
    VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::signature::{
    UNKNOWN_PARAM, arrow_signature, context_signature, function_signature, hoc_signature,
    render_params, return_suffix,
};
use crate::core::skeleton::{
    ComponentEntry, Declaration, EcmaSkeleton, EffectCall, EffectDependencies, ExportEntry,
    ExportKind, FunctionEntry, HocWrapper, ImportEntry, Signature, UNKNOWN_DEPENDENCY,
};
use crate::utils::is_pascal_case;

/// Identifier conventionally bound to the UI framework namespace
/// (`React.memo`, `React.createContext`).
const FRAMEWORK_NAMESPACE: &str = "React";

const CREATE_CONTEXT: &str = "createContext";

/// Output of one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcmaAnalysis {
    pub skeleton: EcmaSkeleton,
    /// Signatures of functions, components and contexts, sorted by line.
    pub signatures: Vec<Signature>,
}

/// A function-valued initializer: arrow function or function expression.
struct FunctionLike<'a> {
    params: Vec<&'a Pat>,
    is_async: bool,
    return_type: Option<&'a swc_ecma_ast::TsTypeAnn>,
}

impl<'a> FunctionLike<'a> {
    fn from_expr(expr: &'a Expr) -> Option<Self> {
        match expr {
            Expr::Arrow(arrow) => Some(Self::from_arrow(arrow)),
            Expr::Fn(fn_expr) => Some(Self::from_function(&fn_expr.function)),
            _ => None,
        }
    }

    fn from_arrow(arrow: &'a ArrowExpr) -> Self {
        Self {
            params: arrow.params.iter().collect(),
            is_async: arrow.is_async,
            return_type: arrow.return_type.as_deref(),
        }
    }

    fn from_function(function: &'a Function) -> Self {
        Self {
            params: function.params.iter().map(|p| &p.pat).collect(),
            is_async: function.is_async,
            return_type: function.return_type.as_deref(),
        }
    }

    fn params_text(&self) -> String {
        render_params(self.params.iter().copied())
    }
}

/// Skeleton analyzer implementing `swc_ecma_visit::Visit`.
///
/// # Usage
///
/// ```ignore
/// let analysis = EcmaAnalyzer::new(&source_map).analyze(&module);
/// // analysis.skeleton: EcmaSkeleton
/// // analysis.signatures: Vec<Signature>
/// ```
pub struct EcmaAnalyzer<'a> {
    /// SWC source map for looking up line positions.
    source_map: &'a SourceMap,
    /// Names already recorded as component, function or context.
    /// Scoped to one analysis call.
    seen_names: HashSet<String>,
    /// Nesting depth: 0 = module level, >0 = inside a function or arrow.
    scope_depth: usize,
    skeleton: EcmaSkeleton,
    signatures: Vec<Signature>,
}

impl<'a> EcmaAnalyzer<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            seen_names: HashSet::new(),
            scope_depth: 0,
            skeleton: EcmaSkeleton::default(),
            signatures: Vec::new(),
        }
    }

    /// Main entry point: analyze a module and return results.
    pub fn analyze(mut self, module: &Module) -> EcmaAnalysis {
        self.visit_module(module);

        let mut skeleton = self.skeleton;
        skeleton.components.sort_by_key(|c| c.line);
        skeleton.functions.sort_by_key(|f| f.line);
        skeleton.contexts.sort_by_key(|c| c.line);
        skeleton.classes.sort_by_key(|c| c.line);
        skeleton.interfaces.sort_by_key(|i| i.line);
        skeleton.types.sort_by_key(|t| t.line);

        let mut signatures = self.signatures;
        signatures.sort_by_key(|s| s.line);

        EcmaAnalysis {
            skeleton,
            signatures,
        }
    }

    fn line_of(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }

    /// Claim a declaration name. Returns false if it was already recorded.
    fn claim_name(&mut self, name: &str) -> bool {
        self.seen_names.insert(name.to_string())
    }

    fn push_signature(&mut self, name: &str, signature: &str, line: usize) {
        self.signatures.push(Signature {
            name: name.to_string(),
            signature: signature.to_string(),
            line,
        });
    }

    /// Record a function-valued declaration as a component or plain function.
    fn record_callable(&mut self, name: &str, line: usize, signature: String) {
        if !self.claim_name(name) {
            return;
        }
        self.push_signature(name, &signature, line);
        if is_pascal_case(name) {
            self.skeleton.components.push(ComponentEntry {
                name: name.to_string(),
                line,
                wrapper: None,
                signature,
            });
        } else {
            self.skeleton.functions.push(FunctionEntry {
                name: name.to_string(),
                line,
                signature,
            });
        }
    }

    fn record_function_decl(&mut self, name: &str, function: &Function) {
        let line = self.line_of(function.span.lo);
        let info = FunctionLike::from_function(function);
        let signature = function_signature(
            name,
            info.is_async,
            &info.params_text(),
            &return_suffix(info.return_type),
        );
        self.record_callable(name, line, signature);
    }

    fn record_hoc(&mut self, name: &str, line: usize, wrapper: HocWrapper, inner: Option<&Expr>) {
        if !self.claim_name(name) {
            return;
        }
        let params = inner
            .map(unwrap_parens)
            .and_then(FunctionLike::from_expr)
            .map(|f| f.params_text())
            .unwrap_or_else(|| UNKNOWN_PARAM.to_string());
        let signature = hoc_signature(name, wrapper, &params);
        self.push_signature(name, &signature, line);
        self.skeleton.components.push(ComponentEntry {
            name: name.to_string(),
            line,
            wrapper: Some(wrapper),
            signature,
        });
    }

    fn record_context(&mut self, name: &str, line: usize) {
        if !self.claim_name(name) {
            return;
        }
        self.push_signature(name, &context_signature(name), line);
        self.skeleton.contexts.push(Declaration {
            name: name.to_string(),
            line,
        });
    }

    fn push_export(&mut self, name: String, kind: ExportKind) {
        self.skeleton.exports.push(ExportEntry { name, kind });
    }

    /// Classify a variable declarator with an identifier binding and an initializer.
    fn classify_declarator(&mut self, node: &VarDeclarator) {
        let Pat::Ident(binding) = &node.name else {
            return;
        };
        let Some(init) = &node.init else {
            return;
        };
        let name = binding.id.sym.as_str();
        let line = self.line_of(node.span.lo);
        let init = unwrap_parens(init);

        if let Some(info) = FunctionLike::from_expr(init) {
            let signature = arrow_signature(
                name,
                info.is_async,
                &info.params_text(),
                &return_suffix(info.return_type),
            );
            self.record_callable(name, line, signature);
            return;
        }

        if let Expr::Call(call) = init {
            if let Some(wrapper) = hoc_wrapper(call) {
                let inner = call.args.first().map(|arg| &*arg.expr);
                self.record_hoc(name, line, wrapper, inner);
                return;
            }
            if is_create_context(call) {
                self.record_context(name, line);
                return;
            }
        }

        if self.scope_depth == 0 {
            self.skeleton.constants += 1;
        }
    }

    fn record_hook_call(&mut self, hook_name: &str, node: &CallExpr) {
        if hook_name == "useEffect" {
            let line = self.line_of(node.span.lo);
            let dependencies = effect_dependencies(node.args.get(1));
            self.skeleton
                .hooks
                .effects
                .push(EffectCall { line, dependencies });
            return;
        }

        let hooks = &mut self.skeleton.hooks;
        match hook_name {
            "useState" => hooks.use_state += 1,
            "useCallback" => hooks.use_callback += 1,
            "useMemo" => hooks.use_memo += 1,
            "useRef" => hooks.use_ref += 1,
            _ => {
                if !hooks.custom.iter().any(|h| h == hook_name) {
                    hooks.custom.push(hook_name.to_string());
                }
            }
        }
    }
}

/// Strip `( ... )` wrappers around an expression.
fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Name of a call's callee when it is `name(...)` or `React.name(...)`.
fn framework_callee_name(call: &CallExpr) -> Option<&str> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    match &**callee {
        Expr::Ident(ident) => Some(ident.sym.as_str()),
        Expr::Member(member) => match (&*member.obj, &member.prop) {
            (Expr::Ident(obj), MemberProp::Ident(prop)) if obj.sym == FRAMEWORK_NAMESPACE => {
                Some(prop.sym.as_str())
            }
            _ => None,
        },
        _ => None,
    }
}

/// `forwardRef(...)`, `memo(...)`, `lazy(...)` or their `React.` forms.
fn hoc_wrapper(call: &CallExpr) -> Option<HocWrapper> {
    framework_callee_name(call).and_then(HocWrapper::from_name)
}

/// `createContext(...)` or `React.createContext(...)`.
fn is_create_context(call: &CallExpr) -> bool {
    framework_callee_name(call) == Some(CREATE_CONTEXT)
}

/// Resolve the second argument of a `useEffect` call.
fn effect_dependencies(arg: Option<&ExprOrSpread>) -> EffectDependencies {
    let Some(arg) = arg else {
        return EffectDependencies::Absent;
    };
    if arg.spread.is_some() {
        return EffectDependencies::Unknown;
    }
    match unwrap_parens(&arg.expr) {
        Expr::Array(array) => EffectDependencies::Array(
            array
                .elems
                .iter()
                .map(|elem| match elem {
                    Some(elem) if elem.spread.is_none() => dependency_name(&elem.expr),
                    _ => UNKNOWN_DEPENDENCY.to_string(),
                })
                .collect(),
        ),
        _ => EffectDependencies::Unknown,
    }
}

/// `id` → `id`, `props.user.id` → `props.user.id`, anything else → `?`.
fn dependency_name(expr: &Expr) -> String {
    match expr {
        Expr::Ident(ident) => ident.sym.to_string(),
        Expr::Member(member) => member_path(member).unwrap_or_else(|| UNKNOWN_DEPENDENCY.to_string()),
        _ => UNKNOWN_DEPENDENCY.to_string(),
    }
}

/// Dotted path of a member chain, keeping only named segments.
///
/// Computed segments contribute their name when they are plain identifiers
/// (`a[b]` → `a.b`); literal segments are dropped (`a[0]` → `a`).
fn member_path(member: &MemberExpr) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let mut current = member;
    let root = loop {
        match &current.prop {
            MemberProp::Ident(prop) => parts.push(prop.sym.as_str()),
            MemberProp::Computed(computed) => {
                if let Expr::Ident(ident) = &*computed.expr {
                    parts.push(ident.sym.as_str());
                }
            }
            MemberProp::PrivateName(_) => {}
        }
        match &*current.obj {
            Expr::Member(inner) => current = inner,
            other => break other,
        }
    };
    if let Expr::Ident(ident) = root {
        parts.push(ident.sym.as_str());
    }
    if parts.is_empty() {
        return None;
    }
    parts.reverse();
    Some(parts.join("."))
}

fn module_export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::Ident(ident) => ident.sym.to_string(),
        ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
    }
}

impl<'a> Visit for EcmaAnalyzer<'a> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        let source = node.src.value.to_string_lossy().to_string();
        let specifiers = node
            .specifiers
            .iter()
            .map(|specifier| match specifier {
                ImportSpecifier::Default(default) => default.local.sym.to_string(),
                ImportSpecifier::Namespace(ns) => format!("* as {}", ns.local.sym),
                ImportSpecifier::Named(named) => named
                    .imported
                    .as_ref()
                    .map(module_export_name)
                    .unwrap_or_else(|| named.local.sym.to_string()),
            })
            .collect();
        self.skeleton.imports.push(ImportEntry { source, specifiers });
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        match &node.decl {
            DefaultDecl::Fn(fn_expr) => {
                if let Some(ident) = &fn_expr.ident {
                    let name = ident.sym.to_string();
                    self.push_export(name.clone(), ExportKind::Default);
                    if fn_expr.function.body.is_some() {
                        self.record_function_decl(&name, &fn_expr.function);
                    }
                }
            }
            DefaultDecl::Class(class_expr) => {
                if let Some(ident) = &class_expr.ident {
                    let line = self.line_of(class_expr.class.span.lo);
                    self.skeleton.classes.push(Declaration {
                        name: ident.sym.to_string(),
                        line,
                    });
                }
            }
            DefaultDecl::TsInterfaceDecl(_) => {}
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_expr(&mut self, node: &ExportDefaultExpr) {
        if let Expr::Ident(ident) = unwrap_parens(&node.expr) {
            self.push_export(ident.sym.to_string(), ExportKind::Default);
        }
        node.visit_children_with(self);
    }

    fn visit_export_decl(&mut self, node: &ExportDecl) {
        match &node.decl {
            Decl::Fn(fn_decl) if fn_decl.function.body.is_some() => {
                self.push_export(fn_decl.ident.sym.to_string(), ExportKind::Named);
            }
            Decl::Var(var_decl) => {
                for decl in &var_decl.decls {
                    if let Pat::Ident(binding) = &decl.name {
                        self.push_export(binding.id.sym.to_string(), ExportKind::Named);
                    }
                }
            }
            _ => {}
        }
        node.visit_children_with(self);
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        for specifier in &node.specifiers {
            let name = match specifier {
                ExportSpecifier::Named(named) => named
                    .exported
                    .as_ref()
                    .map(module_export_name)
                    .unwrap_or_else(|| module_export_name(&named.orig)),
                ExportSpecifier::Default(default) => default.exported.sym.to_string(),
                ExportSpecifier::Namespace(ns) => module_export_name(&ns.name),
            };
            self.push_export(name, ExportKind::Named);
        }
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        // Overload signatures and `declare function` have no body.
        if node.function.body.is_some() {
            let name = node.ident.sym.to_string();
            self.record_function_decl(&name, &node.function);
        }
        node.visit_children_with(self);
    }

    fn visit_function(&mut self, node: &Function) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    // Bodies swc keeps outside `Function`.

    fn visit_constructor(&mut self, node: &Constructor) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    fn visit_static_block(&mut self, node: &StaticBlock) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    fn visit_ts_module_decl(&mut self, node: &TsModuleDecl) {
        self.scope_depth += 1;
        node.visit_children_with(self);
        self.scope_depth -= 1;
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        self.classify_declarator(node);
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee
            && let Expr::Ident(ident) = &**callee
            && ident.sym.starts_with("use")
        {
            self.record_hook_call(ident.sym.as_str(), node);
        }
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        let line = self.line_of(node.class.span.lo);
        self.skeleton.classes.push(Declaration {
            name: node.ident.sym.to_string(),
            line,
        });
        node.visit_children_with(self);
    }

    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        let line = self.line_of(node.span.lo);
        self.skeleton.interfaces.push(Declaration {
            name: node.id.sym.to_string(),
            line,
        });
        node.visit_children_with(self);
    }

    fn visit_ts_type_alias_decl(&mut self, node: &TsTypeAliasDecl) {
        let line = self.line_of(node.span.lo);
        self.skeleton.types.push(Declaration {
            name: node.id.sym.to_string(),
            line,
        });
        node.visit_children_with(self);
    }
}
