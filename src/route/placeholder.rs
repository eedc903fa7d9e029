//! route::placeholder
//!
//! The option-pattern grammar.
//!
//! A template option's value takes one of three forms:
//!
//! - **Bracketed**: `<tries|type:number|alias:t|default:3>` - content is
//!   split on `|` into parameter tokens. A `key:value` token sets one of
//!   the recognized keys (`type`, `default`, `alias`; case-sensitive); a
//!   bare token sets the output name, and when several appear the last
//!   one wins. Any other key is an error.
//! - **Value form**: the empty-string sentinel left by `--flag=` in the
//!   template; the flag takes a value.
//! - **Switch form**: the boolean sentinel left by a bare `--flag`; the
//!   flag is pure presence and must not receive a value.
//!
//! The asymmetry is deliberate and load-bearing: repeated bare names
//! overwrite left to right, while the first unrecognized `key:` token
//! aborts. Templates in the wild depend on both halves.
//!
//! A declared `type:` value is kept verbatim here; whether it names a
//! supported type is checked by the option binder, and only when a value
//! was actually supplied.

use crate::error::RouteError;
use crate::token::RawValue;

/// Metadata carried by a bracketed placeholder. All fields optional; an
/// empty `<>` yields an all-absent spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSpec {
    /// Output name; when present it renames the bound key, otherwise the
    /// raw flag name is used.
    pub name: Option<String>,
    /// Declared type name, verbatim from the template.
    pub ty: Option<String>,
    /// Alternate flag name to fall back to during lookup.
    pub alias: Option<String>,
    /// Default value, casted and bound when the flag was not supplied.
    pub default: Option<String>,
}

/// One parsed option pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionPattern {
    /// Bracketed `<...>` pattern.
    Placeholder(PlaceholderSpec),
    /// `--flag=` declaration: takes a value, no further metadata.
    Value,
    /// Bare `--flag` declaration: boolean presence.
    Switch,
}

/// Parse one option pattern. `option` is the declared flag name, used in
/// error messages only.
///
/// # Example
///
/// ```
/// use cmdroute::route::{parse_placeholder, OptionPattern};
/// use cmdroute::token::RawValue;
///
/// let pattern = RawValue::text("<tries|type:number|default:3>");
/// match parse_placeholder("retries", &pattern).unwrap() {
///     OptionPattern::Placeholder(spec) => {
///         assert_eq!(spec.name.as_deref(), Some("tries"));
///         assert_eq!(spec.ty.as_deref(), Some("number"));
///         assert_eq!(spec.default.as_deref(), Some("3"));
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn parse_placeholder(option: &str, pattern: &RawValue) -> Result<OptionPattern, RouteError> {
    let text = match pattern {
        RawValue::Switch(_) => return Ok(OptionPattern::Switch),
        RawValue::Text(text) => text,
    };
    let inner = match text.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        Some(inner) => inner,
        None => return Ok(OptionPattern::Value),
    };

    let mut spec = PlaceholderSpec::default();
    for token in inner.split('|') {
        if token.is_empty() {
            continue;
        }
        // Split on the first `:` only, so a default may itself contain one.
        match token.split_once(':') {
            Some(("type", value)) => spec.ty = Some(value.to_string()),
            Some(("default", value)) => spec.default = Some(value.to_string()),
            Some(("alias", value)) => spec.alias = Some(value.to_string()),
            Some((key, _)) => {
                return Err(RouteError::invalid_option(
                    option,
                    format!("unknown placeholder key `{key}`"),
                ));
            }
            // Bare token names the output; last one wins.
            None => spec.name = Some(token.to_string()),
        }
    }
    Ok(OptionPattern::Placeholder(spec))
}
