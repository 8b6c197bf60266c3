//! The JSON value tree handed from the reader to the emitter.

/// One parsed JSON datum.
///
/// Numbers keep their source literal and objects keep every entry in source
/// order, duplicates included, so the emitter can reproduce the input without
/// any numeric conversion or key merging.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// The number literal exactly as it appeared in the input.
    Number(String),
    /// Decoded string content (escapes already resolved).
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in input order.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// True for arrays and objects with at least one element.
    pub fn is_block(&self) -> bool {
        match self {
            Value::Array(items) => !items.is_empty(),
            Value::Object(entries) => !entries.is_empty(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Value::Object(entries)
    }
}
