//! route::template
//!
//! Structural parsing of templates and invocations.
//!
//! Both a route template string and a live invocation reduce to the same
//! record: a command name, positional arguments, and a flag map. For a
//! template, argument and option values are pattern strings preserved
//! verbatim; interpretation happens later, in the binders.

use crate::token::{decompose, tokenize, FlagMap};

/// A tokenized and decomposed command line.
///
/// The first positional token is always the command name; it never
/// participates in argument or option binding. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCommand {
    /// Command name, absent when there were no positional tokens.
    pub command: Option<String>,
    /// Positional values (or, for a template, pattern strings) after the
    /// command name, in order.
    pub arguments: Vec<String>,
    /// Flags (or, for a template, option patterns) in declaration order.
    pub options: FlagMap,
}

/// Parse an already-tokenized command line.
pub fn parse_command(tokens: &[String]) -> ParsedCommand {
    let set = decompose(tokens);
    let mut positional = set.positional.into_iter();
    ParsedCommand {
        command: positional.next(),
        arguments: positional.collect(),
        options: set.flags,
    }
}

/// Tokenize raw text, then parse it.
///
/// # Example
///
/// ```
/// use cmdroute::route::parse_text;
///
/// let route = parse_text("deploy <env> --retries=<tries|type:number>");
/// assert_eq!(route.command.as_deref(), Some("deploy"));
/// assert_eq!(route.arguments, vec!["<env>"]);
/// assert!(route.options.contains("retries"));
/// ```
pub fn parse_text(text: &str) -> ParsedCommand {
    parse_command(&tokenize(text))
}
