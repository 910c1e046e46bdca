use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// A webhook endpoint as returned by the backend. Field names follow the
/// backend's JSON contract.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Webhook {
    pub id: String,
    pub name: String,
    pub source_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}

#[derive(Default, Debug, Clone, EnumString, AsRefStr, PartialEq, Eq)]
pub enum SourceType {
    #[default]
    #[strum(serialize = "custom")]
    Custom,
    #[strum(serialize = "stripe")]
    Stripe,
    #[strum(serialize = "github")]
    Github,
    #[strum(serialize = "shopify")]
    Shopify,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateWebhookPayload {
    pub name: String,
    pub source_type: String,
}

impl CreateWebhookPayload {
    pub fn new(name: &str, source_type: &SourceType) -> Self {
        CreateWebhookPayload {
            name: name.to_string(),
            source_type: source_type.as_ref().to_string(),
        }
    }
}

/// Response to a successful create: the public ingestion URL plus the URL
/// the inspector UI uses to browse received requests.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatedWebhook {
    pub webhook_url: String,
    pub inspect_url: String,
}

/// Partial update. `None` fields are left out of the body so the backend
/// only touches what the caller provided.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateWebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_url: Option<String>,
}

/// Every non-2xx response carries this body.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiErrorBody {
    pub error: String,
}
