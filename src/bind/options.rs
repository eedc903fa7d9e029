//! bind::options
//!
//! Option binding.
//!
//! For each `(flag, pattern)` the template declares, in declaration
//! order:
//!
//! 1. Parse the pattern through the placeholder grammar.
//! 2. Look the flag up in the invocation, falling back to the
//!    placeholder's alias when the primary name is absent.
//! 3. With no supplied value: cast and bind the default if one is
//!    declared, otherwise emit no key at all. Type validation never runs
//!    against an unset value, so an unsupported `type:` on an unused
//!    option is not an error.
//! 4. With a supplied value: cast it, then validate the declared type
//!    against the casted value's runtime kind. A bare presence flag
//!    rejects any explicit text value.
//! 5. Bind under the placeholder's name when it has one, else under the
//!    raw flag name.
//!
//! A decomposer-emitted `Switch(false)` counts as supplied: it binds
//! `false` and never falls back to the default.

use std::collections::BTreeMap;

use crate::cast::{cast, cast_raw, Value, ValueKind};
use crate::error::RouteError;
use crate::route::{parse_placeholder, OptionPattern, PlaceholderSpec};
use crate::token::{FlagMap, RawValue};

/// Bind invocation flags against template option patterns.
///
/// # Errors
///
/// Returns [`RouteError::InvalidOption`] for an unknown placeholder key,
/// an unsupported declared type, a declared/actual type mismatch, or a
/// value supplied to a bare presence flag.
pub fn bind_options(
    route_options: &FlagMap,
    invocation_flags: &FlagMap,
) -> Result<BTreeMap<String, Value>, RouteError> {
    let mut bound = BTreeMap::new();

    for (flag, pattern) in route_options.iter() {
        match parse_placeholder(flag, pattern)? {
            OptionPattern::Placeholder(spec) => {
                bind_placeholder(flag, &spec, invocation_flags, &mut bound)?;
            }
            OptionPattern::Value => {
                if let Some(raw) = invocation_flags.get(flag) {
                    bound.insert(flag.to_string(), cast_raw(raw));
                }
            }
            OptionPattern::Switch => {
                if let Some(raw) = invocation_flags.get(flag) {
                    match raw {
                        RawValue::Switch(b) => {
                            bound.insert(flag.to_string(), Value::Bool(*b));
                        }
                        RawValue::Text(_) => {
                            return Err(RouteError::invalid_option(
                                flag,
                                "flag does not take a value",
                            ));
                        }
                    }
                }
            }
        }
    }
    Ok(bound)
}

fn bind_placeholder(
    flag: &str,
    spec: &PlaceholderSpec,
    invocation_flags: &FlagMap,
    bound: &mut BTreeMap<String, Value>,
) -> Result<(), RouteError> {
    let raw = invocation_flags.get(flag).or_else(|| {
        spec.alias
            .as_deref()
            .and_then(|alias| invocation_flags.get(alias))
    });
    let name = spec.name.as_deref().unwrap_or(flag);

    let Some(raw) = raw else {
        if let Some(default) = &spec.default {
            bound.insert(name.to_string(), cast(Value::str(default.clone())));
        }
        return Ok(());
    };

    let value = cast_raw(raw);
    if let Some(ty) = &spec.ty {
        let declared = ValueKind::from_name(ty).ok_or_else(|| {
            RouteError::invalid_option(flag, format!("type `{ty}` isn't supported"))
        })?;
        if value.kind() != declared {
            return Err(RouteError::invalid_option(
                flag,
                format!("expected type {declared} but received {}", value.kind()),
            ));
        }
    }
    bound.insert(name.to_string(), value);
    Ok(())
}
