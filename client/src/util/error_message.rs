//! Display text for errors coming back from the data-access layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted backend reports failures in several shapes: bare strings,
//! PostgREST objects (`message`, `details`, `hint`, `code`) and auth objects
//! (`error`, `error_description`). `ErrorValue` is the typed boundary form and
//! `extract_error_message` turns any of them into one line of UI text.
//!
//! Field priority is fixed: `message` > `error` > `details` > `hint` >
//! `code` + `message` > caller default.

#[cfg(test)]
#[path = "error_message_test.rs"]
mod error_message_test;

use serde_json::Value;

/// Error-shaped value received from the data-access boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorValue {
    /// A bare error string.
    Text(String),
    /// A structured error object. Field types are not checked on arrival.
    Fields(ErrorFields),
    /// Null, numbers, booleans, arrays: nothing usable.
    Unrecognized,
}

/// Known fields of a structured backend error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorFields {
    pub message: Option<Value>,
    pub error: Option<Value>,
    pub details: Option<Value>,
    pub hint: Option<Value>,
    pub code: Option<Value>,
}

impl ErrorFields {
    /// First string-typed field in priority order.
    fn first_text(&self) -> Option<&str> {
        [&self.message, &self.error, &self.details, &self.hint]
            .into_iter()
            .find_map(|field| field.as_ref().and_then(Value::as_str))
    }

    /// `"{code}: {message}"` when both are present.
    ///
    /// Only reachable when `message` is present but not a string, since a string
    /// message is returned by `first_text` first.
    fn code_and_message(&self) -> Option<String> {
        let code = present(self.code.as_ref())?;
        let message = present(self.message.as_ref())?;
        Some(format!("{}: {}", display_value(code), display_value(message)))
    }
}

impl From<Value> for ErrorValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(mut map) => Self::Fields(ErrorFields {
                message: map.remove("message"),
                error: map.remove("error"),
                details: map.remove("details"),
                hint: map.remove("hint"),
                code: map.remove("code"),
            }),
            _ => Self::Unrecognized,
        }
    }
}

impl From<&str> for ErrorValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ErrorValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Normalize an error value into display text, falling back to `default_message`.
pub fn extract_error_message(error: &ErrorValue, default_message: &str) -> String {
    match error {
        ErrorValue::Text(text) => text.clone(),
        ErrorValue::Fields(fields) => fields
            .first_text()
            .map(str::to_owned)
            .or_else(|| fields.code_and_message())
            .unwrap_or_else(|| default_message.to_owned()),
        ErrorValue::Unrecognized => default_message.to_owned(),
    }
}

/// Extract display text from a raw HTTP error body.
///
/// JSON bodies go through [`extract_error_message`]. A non-JSON, non-blank body
/// is used as-is; an empty body yields `default_message`.
pub fn extract_error_body(body: &str, default_message: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return default_message.to_owned();
    }
    let value = serde_json::from_str::<Value>(trimmed).map_or_else(|_| ErrorValue::from(trimmed), ErrorValue::from);
    extract_error_message(&value, default_message)
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
