//! Placeholder substitution for path and SQL templates.
//!
//! Templates are arbitrary strings (not pre-registered files), so a fresh
//! [`minijinja::Environment`] is created per render call. The environment
//! runs with strict undefined behavior: a placeholder without a binding is
//! a fatal configuration error, never silently emitted as literal text.
//!
//! Rendering is pure text substitution. It knows nothing about SQL or path
//! semantics and performs no escaping; callers only interpolate identifiers
//! and numeric-like strings, never free-text user input.

use std::collections::HashMap;

use minijinja::UndefinedBehavior;

use crate::error::CoreError;

/// Render a template string against a name → value binding set.
///
/// Bindings that the template never references are ignored. A placeholder
/// that has no binding yields [`CoreError::Template`].
pub fn render(template: &str, bindings: &[(&str, &str)]) -> Result<String, CoreError> {
    let ctx: HashMap<&str, &str> = bindings.iter().copied().collect();

    let mut env = minijinja::Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, ctx)
        .map_err(|e| CoreError::Template(e.to_string()))
}
