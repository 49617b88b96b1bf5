//! Field naming policies for schema derivation.
//!
//! A policy is applied uniformly to every derived field name in a single
//! derivation. Identity is the default; snake_case and kebab-case cover
//! the common wire conventions; `Custom` takes an arbitrary function.

use std::fmt;
use std::sync::Arc;

/// How derived field names are spelled in a schema.
#[derive(Clone, Default)]
pub enum FieldNaming {
    /// Keep source names exactly as written.
    #[default]
    Identity,
    /// `fooBar` becomes `foo_bar`.
    SnakeCase,
    /// `fooBar` becomes `foo-bar`.
    KebabCase,
    /// An arbitrary transformation supplied by the caller.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl FieldNaming {
    /// Apply this policy to one field name.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Identity => name.to_string(),
            Self::SnakeCase => to_snake_case(name),
            Self::KebabCase => to_kebab_case(name),
            Self::Custom(f) => f(name),
        }
    }

    /// Wrap a function as a custom naming policy.
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }
}

impl fmt::Debug for FieldNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::SnakeCase => f.write_str("SnakeCase"),
            Self::KebabCase => f.write_str("KebabCase"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Convert a camelCase/PascalCase/mixed name to snake_case.
pub fn to_snake_case(name: &str) -> String {
    split_words(name).join("_")
}

/// Convert a camelCase/PascalCase/mixed name to kebab-case.
pub fn to_kebab_case(name: &str) -> String {
    split_words(name).join("-")
}

/// Split a name into lowercase words.
///
/// Boundaries: explicit `_`/`-`/whitespace separators, a lower-to-upper
/// transition (`fooBar`), and the last capital of an acronym run followed
/// by a lowercase letter (`HTTPServer` -> `http`, `server`).
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = name.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() {
            let prev_lower = i > 0 && chars[i - 1].is_lowercase();
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if (prev_lower || prev_digit || (prev_upper && next_lower)) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preserves_names_exactly() {
        let policy = FieldNaming::Identity;
        assert_eq!(policy.apply("fooBar"), "fooBar");
        assert_eq!(policy.apply("already_snake"), "already_snake");
        assert_eq!(policy.apply(""), "");
    }

    #[test]
    fn snake_case_conversion() {
        assert_eq!(to_snake_case("fooBar"), "foo_bar");
        assert_eq!(to_snake_case("FooBar"), "foo_bar");
        assert_eq!(to_snake_case("foo"), "foo");
        assert_eq!(to_snake_case("fooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("userID"), "user_id");
    }

    #[test]
    fn kebab_case_conversion() {
        assert_eq!(to_kebab_case("fooBar"), "foo-bar");
        assert_eq!(to_kebab_case("FooBarBaz"), "foo-bar-baz");
        assert_eq!(to_kebab_case("kebab-already"), "kebab-already");
    }

    #[test]
    fn custom_policy_runs_caller_function() {
        let policy = FieldNaming::custom(|name| name.to_uppercase());
        assert_eq!(policy.apply("fruit"), "FRUIT");
    }
}
