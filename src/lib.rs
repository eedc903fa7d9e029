//! cmdroute - route-template matching and typed argument binding
//!
//! cmdroute matches a concrete command-line invocation against a
//! declarative route template and extracts named, type-checked values.
//! Given `deploy <env> --retries=<tries|type:number|default:3>` and the
//! actual invocation tokens, it decides whether the invocation is this
//! command and, if so, binds its arguments and options.
//!
//! # Architecture
//!
//! Layers, leaves first:
//!
//! - [`token`] - Quote-aware word splitting and flag decomposition
//! - [`route`] - Template/invocation parsing and the placeholder grammar
//! - [`cast`] - Raw value to typed [`Value`] casting
//! - [`bind`] - Positional and option binding against a template
//! - [`engine`] - The [`Router`] boundary: `is_match()` / `parse()`
//! - [`error`] - The [`RouteError`] taxonomy
//!
//! # Template grammar
//!
//! The first template token is the command name. After it, `<name>`
//! declares a required positional and `[name]` an optional one. An
//! option is declared as a bare `--flag` (boolean presence) or as
//! `--flag=<...>` where the placeholder carries `|`-separated metadata:
//! a bare token renames the output key, and `type:`, `alias:` and
//! `default:` set the declared type, a short-flag fallback, and the
//! value bound when the flag is unset.
//!
//! # Invariants
//!
//! 1. Matching is exact command-name equality; a non-match yields an
//!    empty result, never an error
//! 2. Argument binding is positional and order-preserving
//! 3. Unsupplied values are absent keys, never null placeholders
//! 4. `parse()` is pure: a fresh [`Command`] per call, no state retained
//!    between calls
//!
//! # Example
//!
//! ```
//! use cmdroute::{Router, Value};
//!
//! let tokens: Vec<String> = ["deploy", "prod", "--retries=5", "--force"]
//!     .iter()
//!     .map(|t| t.to_string())
//!     .collect();
//! let router = Router::new(
//!     "deploy <env> [region] --retries=<tries|type:number|default:3> --force",
//!     &tokens,
//! );
//!
//! assert!(router.is_match());
//! let cmd = router.parse()?;
//! assert_eq!(cmd.argument.get("env").map(String::as_str), Some("prod"));
//! assert_eq!(cmd.option.get("tries"), Some(&Value::Num(5.0)));
//! assert_eq!(cmd.option.get("force"), Some(&Value::Bool(true)));
//! # Ok::<(), cmdroute::RouteError>(())
//! ```

pub mod bind;
pub mod cast;
pub mod engine;
pub mod error;
pub mod route;
pub mod token;

pub use cast::{Value, ValueKind};
pub use engine::{Command, Router};
pub use error::RouteError;
