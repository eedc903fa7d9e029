//! engine
//!
//! The routing engine: one route template matched against one
//! invocation.
//!
//! A [`Router`] parses its template once at construction and reuses it
//! across calls. `parse()` is a pure function of the constructor inputs:
//! every call builds a fresh [`Command`], so nothing is retained between
//! calls and sharing a `Router` across threads needs no locking.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bind::{bind_arguments, bind_options};
use crate::cast::Value;
use crate::error::RouteError;
use crate::route::{parse_text, ParsedCommand};

/// The bound result of a successful parse.
///
/// Unsupplied optionals and defaulted-but-undeclared options are absent
/// keys, never null placeholders. Serializes to natural JSON via the
/// untagged [`Value`] representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Command {
    /// Matched command name; absent when the route did not match.
    pub command: Option<String>,
    /// Bound positional arguments, always raw strings.
    pub argument: BTreeMap<String, String>,
    /// Bound options, casted and type-checked.
    pub option: BTreeMap<String, Value>,
}

/// Matches a route template against an invocation and binds its values.
///
/// # Example
///
/// ```
/// use cmdroute::{Router, Value};
///
/// let tokens: Vec<String> = ["deploy", "prod", "--retries=5"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// let router = Router::new(
///     "deploy <env> --retries=<tries|type:number|default:3>",
///     &tokens,
/// );
///
/// assert!(router.is_match());
/// let cmd = router.parse().unwrap();
/// assert_eq!(cmd.argument.get("env").map(String::as_str), Some("prod"));
/// assert_eq!(cmd.option.get("tries"), Some(&Value::Num(5.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    route: ParsedCommand,
    invocation: ParsedCommand,
}

impl Router {
    /// Build a router from a template string and invocation tokens.
    ///
    /// Caller-supplied tokens may themselves contain quoted spans or
    /// short-alias pairs (`"-o name"`), so the invocation is re-tokenized
    /// as one joined command line before decomposition; it lands in the
    /// same shape the live shell form would.
    pub fn new(template: &str, invocation: &[String]) -> Self {
        Self {
            route: parse_text(template),
            invocation: parse_text(&invocation.join(" ")),
        }
    }

    /// Build a router against the live process invocation, skipping the
    /// program name.
    pub fn from_env(template: &str) -> Self {
        let tokens: Vec<String> = std::env::args().skip(1).collect();
        Self::new(template, &tokens)
    }

    /// Whether the invocation names this route's command. Exact string
    /// equality; no prefix, glob, or case-insensitive matching.
    pub fn is_match(&self) -> bool {
        self.route.command.is_some() && self.route.command == self.invocation.command
    }

    /// Bind the invocation against the route.
    ///
    /// A non-matching command name is not an error: the result is an
    /// empty [`Command`]. Callers that need to tell "no such command"
    /// apart from "malformed command" check [`Router::is_match`] first.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError`] from argument and option binding; a
    /// failed bind aborts the whole parse.
    pub fn parse(&self) -> Result<Command, RouteError> {
        if !self.is_match() {
            return Ok(Command::default());
        }
        let argument = bind_arguments(&self.route.arguments, &self.invocation.arguments)?;
        let option = bind_options(&self.route.options, &self.invocation.options)?;
        Ok(Command {
            command: self.invocation.command.clone(),
            argument,
            option,
        })
    }
}
