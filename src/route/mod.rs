//! route
//!
//! Route templates and their grammar.
//!
//! # Modules
//!
//! - [`template`] - `ParsedCommand`: the shared shape of a template and
//!   an invocation after tokenization and flag decomposition
//! - [`placeholder`] - the `<name|type:..|alias:..|default:..>` grammar
//!   for option patterns
//!
//! A route template is itself a [`template::ParsedCommand`] whose
//! argument entries are pattern strings (`<name>` / `[name]`) and whose
//! option values are pattern strings or boolean sentinels. Parsing the
//! template and the invocation through the same code path is what keeps
//! the two sides structurally comparable.

pub mod placeholder;
pub mod template;

pub use placeholder::{parse_placeholder, OptionPattern, PlaceholderSpec};
pub use template::{parse_command, parse_text, ParsedCommand};
