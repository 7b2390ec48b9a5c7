//! Skeleton renderers.
//!
//! Each backend renders to a fixed-order block with one line per non-empty
//! category. The category labels (`imports:`, `exports:`, `components:`,
//! `contexts:`, `fn:`, `hooks:`, `classes:`, `types:`, `const:`) are stable and
//! parsed back by downstream tooling.

mod ecma;
mod python;

pub use ecma::render_ecma_skeleton;
pub use python::render_python_skeleton;

use crate::core::skeleton::{Signature, Skeleton};

/// Render a skeleton with the renderer of the backend that produced it.
pub fn render_skeleton(skeleton: &Skeleton) -> String {
    match skeleton {
        Skeleton::Ecma(s) => render_ecma_skeleton(s),
        Skeleton::Python(s) => render_python_skeleton(s),
    }
}

/// `    {signature}  // line {line}` per entry.
pub fn render_signatures(signatures: &[Signature]) -> String {
    signatures
        .iter()
        .map(|s| format!("    {}  // line {}", s.signature, s.line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `N ext, ./a, ./b`: external sources collapse into a single count,
/// local sources are listed in order.
fn render_import_summary<'a>(sources: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut external = 0;
    let mut local = Vec::new();
    for source in sources {
        if source.starts_with('.') {
            local.push(source);
        } else {
            external += 1;
        }
    }
    if external == 0 && local.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(local.len() + 1);
    if external > 0 {
        parts.push(format!("{} ext", external));
    }
    parts.extend(local.into_iter().map(str::to_string));
    Some(parts.join(", "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_import_summary() {
        assert_eq!(render_import_summary(Vec::<&str>::new()), None);
        assert_eq!(
            render_import_summary(["react", "./a", "lodash", "../b"]),
            Some("2 ext, ./a, ../b".to_string())
        );
        assert_eq!(render_import_summary(["./only"]), Some("./only".to_string()));
    }

    #[test]
    fn test_render_signatures() {
        let signatures = vec![
            Signature {
                name: "load".to_string(),
                signature: "async function load(id)".to_string(),
                line: 3,
            },
            Signature {
                name: "App".to_string(),
                signature: "const App = () => ...".to_string(),
                line: 9,
            },
        ];
        assert_eq!(
            render_signatures(&signatures),
            "    async function load(id)  // line 3\n    const App = () => ...  // line 9"
        );
        assert_eq!(render_signatures(&[]), "");
    }
}
