use super::render_import_summary;
use crate::core::skeleton::{PythonClass, PythonFunction, PythonSkeleton};

/// Constant names listed before the overflow count.
const MAX_LISTED_CONSTANTS: usize = 5;

/// Render a Python skeleton.
///
/// Category order: imports, classes, fn, const. Only the first decorator of
/// a class or function is shown.
pub fn render_python_skeleton(skeleton: &PythonSkeleton) -> String {
    let mut lines = Vec::new();

    if let Some(imports) = render_import_summary(skeleton.imports.iter().map(|i| i.module.as_str()))
    {
        lines.push(format!("imports: {}", imports));
    }

    if !skeleton.classes.is_empty() {
        let classes: Vec<_> = skeleton.classes.iter().map(render_class).collect();
        lines.push(format!("classes: {}", classes.join(", ")));
    }

    if !skeleton.functions.is_empty() {
        let functions: Vec<_> = skeleton.functions.iter().map(render_function).collect();
        lines.push(format!("fn: {}", functions.join(", ")));
    }

    if !skeleton.constants.is_empty() {
        lines.push(format!("const: {}", render_constants(&skeleton.constants)));
    }

    lines.join("\n")
}

/// `Name @decorator (Base,Other):line`
fn render_class(class: &PythonClass) -> String {
    let mut parts = vec![class.name.clone()];
    if let Some(decorator) = class.decorators.first() {
        parts.push(format!("@{}", decorator));
    }
    if !class.bases.is_empty() {
        parts.push(format!("({})", class.bases.join(",")));
    }
    format!("{}:{}", parts.join(" "), class.line)
}

/// `@decorator name(params):line`
fn render_function(function: &PythonFunction) -> String {
    let decorator = function
        .decorators
        .first()
        .map(|d| format!("@{} ", d))
        .unwrap_or_default();
    format!("{}{}({}):{}", decorator, function.name, function.params, function.line)
}

fn render_constants(names: &[String]) -> String {
    if names.len() > MAX_LISTED_CONSTANTS {
        format!(
            "{} +{} more",
            names[..MAX_LISTED_CONSTANTS].join(", "),
            names.len() - MAX_LISTED_CONSTANTS
        )
    } else {
        names.join(", ")
    }
}
