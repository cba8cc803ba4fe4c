//! Closed value tree handed to the emitter.
//!
//! The emitter dispatches over exactly four shapes: absence, scalars,
//! ordered sequences, and insertion-ordered mappings. Modeling them as a
//! closed enum keeps the dispatch statically exhaustive instead of relying
//! on open-ended runtime inspection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in the emission value tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absence; renders as `null` inline, or as a bare `key:` when it is
    /// the value of a mapping entry.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar. No field in the document model carries a fractional
    /// number, so a closed integer variant keeps emission deterministic.
    Int(i64),
    /// String scalar; quoted on emission only when syntactically required.
    Str(String),
    /// Ordered sequence.
    Seq(Vec<Value>),
    /// Mapping with insertion order preserved end-to-end.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Returns `true` for a non-empty sequence or mapping, which render as
    /// an indented block rather than inline.
    #[must_use]
    pub fn is_block(&self) -> bool {
        match self {
            Self::Seq(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Str(_) => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_not_blocks() {
        assert!(!Value::Null.is_block());
        assert!(!Value::Bool(true).is_block());
        assert!(!Value::Int(42).is_block());
        assert!(!Value::from("text").is_block());
    }

    #[test]
    fn empty_containers_are_not_blocks() {
        assert!(!Value::Seq(Vec::new()).is_block());
        assert!(!Value::Map(IndexMap::new()).is_block());
    }

    #[test]
    fn populated_containers_are_blocks() {
        assert!(Value::Seq(vec![Value::from("a")]).is_block());
        let mut map = IndexMap::new();
        let _ = map.insert("k".to_string(), Value::Null);
        assert!(Value::Map(map).is_block());
    }
}
