//! error
//!
//! Error taxonomy for route matching and binding.
//!
//! Both variants represent template-authoring or caller mistakes, never
//! transient conditions. A non-matching command name is deliberately not
//! represented here: `parse()` returns an empty [`crate::engine::Command`]
//! for a non-match, and callers check [`crate::engine::Router::is_match`]
//! to tell "no such command" apart from "malformed command".

use thiserror::Error;

/// Errors raised while binding an invocation against a route template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A required positional argument pattern (`<name>`) had no
    /// corresponding invocation value. Aborts the whole parse; no partial
    /// result is returned.
    #[error("missing required argument `{0}`")]
    MissingArgument(String),

    /// An option declaration or supplied option value is invalid: an
    /// unknown placeholder key, an unsupported declared type, a mismatch
    /// between declared and actual type, or a value given to a bare
    /// presence flag.
    #[error("invalid option `{option}`: {message}")]
    InvalidOption {
        /// The flag name as declared in the template.
        option: String,
        /// Human-readable description of what was wrong.
        message: String,
    },
}

impl RouteError {
    pub(crate) fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}
