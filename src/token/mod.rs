//! token
//!
//! Lexical layer: turns raw command-line text into word tokens, and word
//! tokens into positional values plus flags.
//!
//! # Modules
//!
//! - [`words`] - Quote-aware shell-style word splitting
//! - [`flags`] - Flag decomposition (`--name=value`, `--name`, `-x value`)
//!
//! Both template strings and live invocations pass through this layer, so
//! a route and the invocation it matches are always tokenized by the same
//! rules.

pub mod flags;
pub mod words;

pub use flags::{decompose, FlagMap, RawValue, TokenSet};
pub use words::tokenize;
