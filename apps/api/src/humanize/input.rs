//! Loosely-typed text input accepted at the API boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Either plain text or an object carrying the text under a known key.
///
/// Tool-calling agents often wrap their argument as `{"query": ...}` or
/// `{"description": ...}` instead of sending a bare string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    Fields(TextFields),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextInput {
    /// Best-effort conversion to text. Never fails.
    ///
    /// Fallback order:
    /// 1. a plain string as-is
    /// 2. the first non-empty of `text`, `query`, `description`, `url`
    /// 3. an object with no usable known key and no other keys → empty string
    /// 4. `null` → empty string, a JSON string → its contents
    /// 5. anything else → its compact JSON rendering
    pub fn coerce(&self) -> String {
        match self {
            TextInput::Text(s) => s.clone(),
            TextInput::Fields(fields) => match fields.first_present() {
                Some(text) => text.to_string(),
                None if fields.extra.is_empty() => String::new(),
                None => render_json(fields),
            },
            TextInput::Other(Value::Null) => String::new(),
            TextInput::Other(Value::String(s)) => s.clone(),
            TextInput::Other(value) => value.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.coerce().trim().is_empty()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        TextInput::Other(Value::Null)
    }
}

impl TextFields {
    fn first_present(&self) -> Option<&str> {
        [&self.text, &self.query, &self.description, &self.url]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}

fn render_json(fields: &TextFields) -> String {
    serde_json::to_string(fields).unwrap_or_default()
}
