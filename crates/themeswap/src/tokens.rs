//! Token trees: the nested structures design tokens are written in.
//!
//! A theme source like
//!
//! ```json
//! { "colors": { "primary": { "default": "#f00", "darker": "#400" } } }
//! ```
//!
//! deserializes into a [`TokenTree`] whose interior nodes are
//! [`TokenValue::Tree`] and whose leaves are everything else. The branch/leaf
//! decision is made here, once: lists are leaves (a `[size, metadata]`
//! font-size pair is one value, never descended into), and so are strings,
//! numbers, and booleans. Every pass downstream walks the same shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============ Values ============

/// A single value in a token tree.
///
/// Untagged: deserialization tries each variant against the source value, so
/// JSON and TOML themes need no annotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<TokenValue>),
    Tree(TokenTree),
}

impl TokenValue {
    /// Whether this value is an interior node.
    pub fn is_tree(&self) -> bool {
        matches!(self, TokenValue::Tree(_))
    }

    /// Render a scalar as CSS declaration text.
    ///
    /// Numbers print in their shortest form (`2`, not `2.0`) so output
    /// matches what theme authors wrote. Lists and trees have no scalar
    /// rendering and yield `None`.
    pub fn scalar_css(&self) -> Option<String> {
        match self {
            TokenValue::Bool(b) => Some(b.to_string()),
            TokenValue::Num(n) => Some(n.to_string()),
            TokenValue::Str(s) => Some(s.clone()),
            TokenValue::List(_) | TokenValue::Tree(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Str(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Str(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Num(value)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        TokenValue::Num(value as f64)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        TokenValue::Bool(value)
    }
}

impl From<Vec<TokenValue>> for TokenValue {
    fn from(value: Vec<TokenValue>) -> Self {
        TokenValue::List(value)
    }
}

impl From<TokenTree> for TokenValue {
    fn from(value: TokenTree) -> Self {
        TokenValue::Tree(value)
    }
}

// ============ Trees ============

/// An ordered mapping of token names to values.
///
/// Key order is document order: themes keep their keys in the order the
/// author wrote them, and every downstream pass (and the CSS it emits)
/// follows that order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenTree(IndexMap<String, TokenValue>);

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert a token, replacing (in place) any previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Option<TokenValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.0.get(key)
    }

    /// Follow a key path through nested trees to the value it addresses.
    pub fn get_path(&self, path: &[&str]) -> Option<&TokenValue> {
        let (first, rest) = path.split_first()?;
        let value = self.0.get(*first)?;
        if rest.is_empty() {
            return Some(value);
        }
        match value {
            TokenValue::Tree(subtree) => subtree.get_path(rest),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl From<IndexMap<String, TokenValue>> for TokenTree {
    fn from(map: IndexMap<String, TokenValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, TokenValue)> for TokenTree {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============ Tests ============
