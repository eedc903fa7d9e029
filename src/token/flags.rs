//! token::flags
//!
//! Flag decomposition: splits an ordered token sequence into positional
//! values and a flag map.
//!
//! # Recognized shapes
//!
//! - `--name=value` - flag with an explicit text value
//! - `--name` - boolean presence flag
//! - `-x value` / `-x=value` - short alias, consuming the next token as
//!   its value when that token is not itself flag-shaped
//!
//! Everything else is positional, order preserved. Repeated flags keep
//! their first position and the last value wins.

use serde::{Deserialize, Serialize};

/// A raw flag value as emitted by decomposition: explicit text or a
/// boolean presence switch.
///
/// `Switch(false)` is a real, supplied value, not an absence; the option
/// binder relies on that distinction when deciding whether a default
/// applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Presence (or explicit absence) of a value-less flag.
    Switch(bool),
    /// Text supplied via `--name=value` or `-x value`.
    Text(String),
}

impl RawValue {
    /// Construct a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Insertion-ordered map from flag name to [`RawValue`].
///
/// Template declaration order drives option binding, so ordering is part
/// of the contract. Flag maps are tiny; a Vec-backed map keeps order
/// without a hashing dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMap {
    entries: Vec<(String, RawValue)>,
}

impl FlagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a flag. A repeated name keeps its original position and
    /// takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: RawValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a flag by name.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, RawValue)> for FlagMap {
    fn from_iter<I: IntoIterator<Item = (S, RawValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Result of decomposing a token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    /// Non-flag tokens in their original order.
    pub positional: Vec<String>,
    /// Flags in first-seen order.
    pub flags: FlagMap,
}

/// Decompose tokens into positional values and flags.
///
/// # Example
///
/// ```
/// use cmdroute::token::{decompose, RawValue};
///
/// let tokens: Vec<String> = ["deploy", "prod", "--retries=3", "--force"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// let set = decompose(&tokens);
///
/// assert_eq!(set.positional, vec!["deploy", "prod"]);
/// assert_eq!(set.flags.get("retries"), Some(&RawValue::text("3")));
/// assert_eq!(set.flags.get("force"), Some(&RawValue::Switch(true)));
/// ```
pub fn decompose(tokens: &[String]) -> TokenSet {
    let mut set = TokenSet::default();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        if let Some(rest) = token.strip_prefix("--") {
            if rest.is_empty() {
                // A bare `--` separator carries no name; pass it through.
                set.positional.push(token.clone());
                continue;
            }
            match rest.split_once('=') {
                Some((name, value)) => set.flags.insert(name, RawValue::text(value)),
                None => set.flags.insert(rest, RawValue::Switch(true)),
            }
        } else if let Some(rest) = token.strip_prefix('-').filter(|r| !r.is_empty()) {
            match rest.split_once('=') {
                Some((name, value)) => set.flags.insert(name, RawValue::text(value)),
                None => {
                    let takes_value = iter.peek().is_some_and(|next| !is_flag_shaped(next));
                    if takes_value {
                        let value = iter.next().cloned().unwrap_or_default();
                        set.flags.insert(rest, RawValue::Text(value));
                    } else {
                        set.flags.insert(rest, RawValue::Switch(true));
                    }
                }
            }
        } else {
            set.positional.push(token.clone());
        }
    }
    set
}

fn is_flag_shaped(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn long_flag_with_value() {
        let set = decompose(&tokens(&["cmd", "--retries=3"]));
        assert_eq!(set.positional, vec!["cmd"]);
        assert_eq!(set.flags.get("retries"), Some(&RawValue::text("3")));
    }

    #[test]
    fn value_may_contain_equals() {
        let set = decompose(&tokens(&["--filter=key=value"]));
        assert_eq!(set.flags.get("filter"), Some(&RawValue::text("key=value")));
    }

    #[test]
    fn bare_long_flag_is_switch() {
        let set = decompose(&tokens(&["cmd", "--force"]));
        assert_eq!(set.flags.get("force"), Some(&RawValue::Switch(true)));
    }

    #[test]
    fn short_alias_consumes_next_token() {
        let set = decompose(&tokens(&["cmd", "-o", "name"]));
        assert_eq!(set.flags.get("o"), Some(&RawValue::text("name")));
        assert_eq!(set.positional, vec!["cmd"]);
    }

    #[test]
    fn short_alias_before_flag_is_switch() {
        let set = decompose(&tokens(&["-v", "--force"]));
        assert_eq!(set.flags.get("v"), Some(&RawValue::Switch(true)));
        assert_eq!(set.flags.get("force"), Some(&RawValue::Switch(true)));
    }

    #[test]
    fn short_alias_with_equals() {
        let set = decompose(&tokens(&["-o=name"]));
        assert_eq!(set.flags.get("o"), Some(&RawValue::text("name")));
    }

    #[test]
    fn trailing_short_alias_is_switch() {
        let set = decompose(&tokens(&["cmd", "-v"]));
        assert_eq!(set.flags.get("v"), Some(&RawValue::Switch(true)));
    }

    #[test]
    fn positional_order_preserved() {
        let set = decompose(&tokens(&["a", "--x", "b", "c"]));
        assert_eq!(set.positional, vec!["a", "b", "c"]);
    }

    #[test]
    fn repeated_flag_last_value_wins() {
        let set = decompose(&tokens(&["--opt=1", "--opt=2"]));
        assert_eq!(set.flags.get("opt"), Some(&RawValue::text("2")));
        assert_eq!(set.flags.len(), 1);
    }

    #[test]
    fn flag_map_iterates_in_insertion_order() {
        let set = decompose(&tokens(&["--b=1", "--a=2", "--c"]));
        let names: Vec<&str> = set.flags.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn lone_dashes_are_positional() {
        let set = decompose(&tokens(&["-", "--"]));
        assert_eq!(set.positional, vec!["-", "--"]);
        assert!(set.flags.is_empty());
    }
}
