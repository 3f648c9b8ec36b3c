use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid AI response format")]
    NoJsonObject,
    #[error("Invalid AI response format")]
    Malformed(#[source] serde_json::Error),
    #[error("AI response did not match the expected {expected} format")]
    Shape {
        expected: &'static str,
        reason: String,
    },
}

/// Greedy match from the first `{` to the last `}`.
///
/// Two separate objects in the same text are captured together, which
/// then fails to parse. Models are asked for a single object so this is
/// left as is.
pub fn find_json_object(content: &str) -> Option<&str> {
    lazy_static! {
        static ref JSON_OBJECT_RE: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
    }
    JSON_OBJECT_RE.find(content).map(|m| m.as_str())
}

pub fn extract_json_value(content: &str) -> Result<serde_json::Value, FormatError> {
    let raw = find_json_object(content).ok_or(FormatError::NoJsonObject)?;
    serde_json::from_str(raw).map_err(FormatError::Malformed)
}

/// Extracts the embedded object and deserializes it into `T`.
///
/// Syntax errors are reported as [`FormatError::Malformed`]; valid JSON of
/// the wrong shape as [`FormatError::Shape`].
pub fn extract_typed<T: DeserializeOwned>(
    content: &str,
    expected: &'static str,
) -> Result<T, FormatError> {
    let value = extract_json_value(content)?;
    serde_json::from_value(value).map_err(|e| FormatError::Shape {
        expected,
        reason: e.to_string(),
    })
}
