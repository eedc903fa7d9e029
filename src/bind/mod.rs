//! bind
//!
//! Binding layer: pairs a route template's patterns with an invocation's
//! values.
//!
//! # Modules
//!
//! - [`arguments`] - positional binding with `<required>` / `[optional]`
//!   semantics; values stay raw strings
//! - [`options`] - flag binding with alias fallback, defaults, declared
//!   type validation, and casting
//!
//! Binders are pure functions over already-parsed structures. They return
//! the first error eagerly; a failed bind never yields a partial result.

pub mod arguments;
pub mod options;

pub use arguments::bind_arguments;
pub use options::bind_options;
