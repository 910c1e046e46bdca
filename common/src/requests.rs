use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One request captured by a webhook endpoint. Immutable once received;
/// the client only ever reads these.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WebhookRequest {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    #[serde(default, deserialize_with = "deserialize_headers")]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl WebhookRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// The backend stores headers as Go `http.Header`, so each value arrives as
/// a list of strings; older capture paths emit a plain string. Accept both,
/// comma-joining multi-valued headers the way HTTP folds them.
fn deserialize_headers<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum HeaderValue {
        One(String),
        Many(Vec<String>),
    }

    let raw: HashMap<String, HeaderValue> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                HeaderValue::One(value) => value,
                HeaderValue::Many(values) => values.join(", "),
            };
            (name, value)
        })
        .collect())
}
