use super::render_import_summary;
use crate::core::skeleton::{
    ComponentEntry, Declaration, EcmaSkeleton, EffectCall, EffectDependencies, ExportEntry,
    ExportKind, HookUsage,
};

/// Render an ECMAScript skeleton.
///
/// Category order: imports, exports, components, contexts, fn, hooks,
/// classes, types (interfaces then aliases), const (as a count).
pub fn render_ecma_skeleton(skeleton: &EcmaSkeleton) -> String {
    let mut lines = Vec::new();

    if let Some(imports) = render_import_summary(skeleton.imports.iter().map(|i| i.source.as_str()))
    {
        lines.push(format!("imports: {}", imports));
    }

    if !skeleton.exports.is_empty() {
        lines.push(format!("exports: {}", join(&skeleton.exports, render_export)));
    }

    if !skeleton.components.is_empty() {
        lines.push(format!(
            "components: {}",
            join(&skeleton.components, render_component)
        ));
    }

    if !skeleton.contexts.is_empty() {
        lines.push(format!("contexts: {}", join(&skeleton.contexts, render_declaration)));
    }

    if !skeleton.functions.is_empty() {
        lines.push(format!(
            "fn: {}",
            join(&skeleton.functions, |f| format!("{}:{}", f.name, f.line))
        ));
    }

    let hooks = render_hooks(&skeleton.hooks);
    if !hooks.is_empty() {
        lines.push(format!("hooks: {}", hooks.join(", ")));
    }

    if !skeleton.classes.is_empty() {
        lines.push(format!("classes: {}", join(&skeleton.classes, render_declaration)));
    }

    if !skeleton.interfaces.is_empty() || !skeleton.types.is_empty() {
        let types: Vec<_> = skeleton
            .interfaces
            .iter()
            .chain(&skeleton.types)
            .map(render_declaration)
            .collect();
        lines.push(format!("types: {}", types.join(", ")));
    }

    if skeleton.constants > 0 {
        lines.push(format!("const: {}", skeleton.constants));
    }

    lines.join("\n")
}

fn join<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect::<Vec<_>>().join(", ")
}

/// Default exports carry a `*` marker.
fn render_export(export: &ExportEntry) -> String {
    match export.kind {
        ExportKind::Default => format!("{}*", export.name),
        ExportKind::Named => export.name.clone(),
    }
}

fn render_component(component: &ComponentEntry) -> String {
    match component.wrapper {
        Some(wrapper) => format!("{}({}):{}", component.name, wrapper.as_str(), component.line),
        None => format!("{}:{}", component.name, component.line),
    }
}

fn render_declaration(declaration: &Declaration) -> String {
    format!("{}:{}", declaration.name, declaration.line)
}

/// Built-in counters, then custom hook names, then one entry per effect.
fn render_hooks(hooks: &HookUsage) -> Vec<String> {
    let mut parts = Vec::new();
    for (name, count) in [
        ("useState", hooks.use_state),
        ("useCallback", hooks.use_callback),
        ("useMemo", hooks.use_memo),
        ("useRef", hooks.use_ref),
    ] {
        if count > 0 {
            parts.push(format!("{}({})", name, count));
        }
    }
    parts.extend(hooks.custom.iter().cloned());
    parts.extend(hooks.effects.iter().map(render_effect));
    parts
}

/// `∞` marks an effect that runs on every render, `?` a non-literal dependency argument.
fn render_effect(effect: &EffectCall) -> String {
    let dependencies = match &effect.dependencies {
        EffectDependencies::Absent => "∞".to_string(),
        EffectDependencies::Unknown => "?".to_string(),
        EffectDependencies::Array(names) => format!("[{}]", names.join(",")),
    };
    format!("useEffect({}):{}", dependencies, effect.line)
}
