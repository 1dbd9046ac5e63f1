use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated value: one of three primitives or a nested collection.
///
/// Serializes untagged, so a `Value` renders as the bare JSON it stands for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Value {
    /// Integer value
    Integer(i64),
    /// Short alphanumeric string
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Object with keys kept in insertion order
    Object(IndexMap<String, Value>),
    /// Ordered array of values
    Array(Vec<Value>),
}

/// Discriminant of a [`Value`], handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Text`]
    Text,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Object`]
    Object,
    /// [`Value::Array`]
    Array,
}

impl Value {
    /// The variant tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
        }
    }

    /// Whether this value is an integer, string or boolean.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Text(_) | Self::Boolean(_))
    }

    /// Nesting depth: 0 for primitives, one more than the deepest child for
    /// collections.
    ///
    /// An empty collection also reports 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Object(map) => 1 + map.values().map(Self::depth).max().unwrap_or(0),
            Self::Array(items) => 1 + items.iter().map(Self::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Number of direct children, or `None` for primitives.
    #[must_use]
    pub fn child_count(&self) -> Option<usize> {
        match self {
            Self::Object(map) => Some(map.len()),
            Self::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Total number of values in the tree, this one included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Object(map) => 1 + map.values().map(Self::node_count).sum::<usize>(),
            Self::Array(items) => 1 + items.iter().map(Self::node_count).sum::<usize>(),
            _ => 1,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Text => "string",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        };
        f.write_str(name)
    }
}

// -------------------------------------------------------------------------------------------------
// Conversions into `serde_json::Value`, so callers that already speak serde_json can embed a
// generated tree without a round trip through text.
// -------------------------------------------------------------------------------------------------

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(i) => Self::Number(i.into()),
            Value::Text(s) => Self::String(s),
            Value::Boolean(b) => Self::Bool(b),
            Value::Object(map) => Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Integer(i) => Self::Number((*i).into()),
            Value::Text(s) => Self::String(s.clone()),
            Value::Boolean(b) => Self::Bool(*b),
            Value::Object(map) => {
                Self::Object(map.iter().map(|(k, v)| (k.clone(), v.into())).collect())
            }
            Value::Array(items) => Self::Array(items.iter().map(Into::into).collect()),
        }
    }
}
