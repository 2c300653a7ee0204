//! Lenient field readers for server payloads.
//!
//! The server encodes empty slices and unset strings as `null`, and older
//! rows carry `-1` for "no correct option". None of that is malformed JSON,
//! so these readers map it to the field's empty value instead of failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional display text. Numbers and booleans are shown as written; `null`
/// and structured values count as absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_of))
}

/// Text that is empty when absent or `null`.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Option labels. `null` or a non-array is an empty list; odd entries keep
/// their slot as empty text so indexes stay aligned with `correct_option`.
pub fn option_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let options = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| text_of(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(options)
}

/// A zero-based index. Negative, fractional and non-numeric values mean
/// "none".
pub fn optional_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|index| usize::try_from(index).ok()))
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
