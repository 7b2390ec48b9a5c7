//! Common utility functions shared across the codebase.

use chrono::Local;

/// Checks whether a declared name follows the PascalCase convention
/// (`^[A-Z][A-Za-z0-9]*$`).
///
/// This is the sole rule used to tell UI components apart from plain
/// functions: a PascalCase name is a component, anything else is not.
/// No JSX or return-value analysis is performed.
///
/// # Examples
///
/// ```
/// use codebase_compact::utils::is_pascal_case;
///
/// assert!(is_pascal_case("MyComponent"));
/// assert!(is_pascal_case("A1"));
/// assert!(!is_pascal_case("helper"));
/// assert!(!is_pascal_case("My_Component"));
/// assert!(!is_pascal_case(""));
/// ```
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Rough token estimate: one token per four characters, rounded up.
///
/// # Examples
///
/// ```
/// use codebase_compact::utils::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("abcd"), 1);
/// assert_eq!(estimate_tokens("abcde"), 2);
/// ```
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

/// Format a token count for display (`1.2M`, `3.4K`, `950`).
pub fn format_token_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Local time stamp used in generated file names: `2024-01-31_09-05-00`.
pub fn date_stamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}
