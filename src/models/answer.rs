use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Index into the question's options.
    Option(usize),
    /// Free text for questions without options.
    Text(String),
}

impl Answer {
    pub fn option(&self) -> Option<usize> {
        match self {
            Answer::Option(index) => Some(*index),
            Answer::Text(_) => None,
        }
    }
}

/// Server-issued attempt identifier.
///
/// Opaque to the client: it is echoed back exactly as received, whether the
/// server sent a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptId(Value);

impl AttemptId {
    /// Accepts numbers and non-empty strings.
    pub fn from_value(value: Value) -> Option<Self> {
        match &value {
            Value::Number(_) => Some(Self(value)),
            Value::String(s) if !s.is_empty() => Some(Self(value)),
            _ => None,
        }
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
