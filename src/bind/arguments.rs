//! bind::arguments
//!
//! Positional argument binding.
//!
//! Binding is positional and order-preserving: the i-th template pattern
//! binds the i-th invocation value. `<name>` is required and errors when
//! its value is absent or empty; `[name]` binds only when a value is
//! present and is otherwise omitted entirely. Extra invocation values
//! beyond the template's patterns are ignored. Arguments are never
//! casted; they stay raw strings.

use std::collections::BTreeMap;

use crate::error::RouteError;

/// Bind invocation positionals against template patterns.
///
/// # Errors
///
/// Returns [`RouteError::MissingArgument`] when a `<name>` pattern has no
/// (or an empty) corresponding value.
pub fn bind_arguments(
    route_args: &[String],
    invocation_args: &[String],
) -> Result<BTreeMap<String, String>, RouteError> {
    let mut bound = BTreeMap::new();

    for (i, pattern) in route_args.iter().enumerate() {
        let value = invocation_args.get(i);
        if let Some(name) = required_name(pattern) {
            match value {
                Some(v) if !v.is_empty() => {
                    bound.insert(name.to_string(), v.clone());
                }
                _ => return Err(RouteError::MissingArgument(name.to_string())),
            }
        } else if let Some(v) = value {
            bound.insert(optional_name(pattern).to_string(), v.clone());
        }
    }
    Ok(bound)
}

fn required_name(pattern: &str) -> Option<&str> {
    pattern.strip_prefix('<')?.strip_suffix('>')
}

/// `[name]` strips its brackets; a bracket-less pattern is not part of
/// the declared grammar but must not crash, so its literal text serves
/// as the name and it binds like an optional.
fn optional_name(pattern: &str) -> &str {
    pattern
        .strip_prefix('[')
        .and_then(|p| p.strip_suffix(']'))
        .unwrap_or(pattern)
}
