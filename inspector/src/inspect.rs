use client::{AuthContext, WebhookApi};
use common::{Webhook, WebhookRequest};
use futures::join;

#[derive(Debug, Clone, PartialEq)]
pub enum InspectorState {
    Loading,
    Loaded {
        webhook: Webhook,
        requests: Vec<WebhookRequest>,
        selected: usize,
    },
    Empty {
        webhook: Webhook,
    },
    Failed {
        error: String,
    },
}

/// View-model for one webhook's request history. Loading fetches the
/// metadata and the history in parallel; after that every transition is
/// in-memory only, the full history stays resident.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInspector {
    state: InspectorState,
}

impl RequestInspector {
    pub fn new() -> Self {
        RequestInspector {
            state: InspectorState::Loading,
        }
    }

    pub async fn load<A: WebhookApi>(api: &A, auth: &AuthContext, webhook_id: &str) -> Self {
        let (webhook, requests) = join!(
            api.get_webhook(webhook_id, auth),
            api.get_webhook_requests(webhook_id, auth)
        );

        let state = match (webhook, requests) {
            (Ok(webhook), Ok(requests)) if requests.is_empty() => {
                InspectorState::Empty { webhook }
            }
            // History is most-recent-first, so the newest request starts selected.
            (Ok(webhook), Ok(requests)) => InspectorState::Loaded {
                webhook,
                requests,
                selected: 0,
            },
            (Err(error), _) | (_, Err(error)) => {
                log::error!("failed to load webhook {webhook_id}: {error}");
                InspectorState::Failed {
                    error: error.to_string(),
                }
            }
        };

        RequestInspector { state }
    }

    pub fn state(&self) -> &InspectorState {
        &self.state
    }

    /// Selects a request from the resident history. Pure state transition,
    /// no network call. Returns false when the index is out of range or
    /// nothing is loaded.
    pub fn select(&mut self, index: usize) -> bool {
        match &mut self.state {
            InspectorState::Loaded {
                requests, selected, ..
            } if index < requests.len() => {
                *selected = index;
                true
            }
            _ => false,
        }
    }

    pub fn selected_request(&self) -> Option<&WebhookRequest> {
        match &self.state {
            InspectorState::Loaded {
                requests, selected, ..
            } => requests.get(*selected),
            _ => None,
        }
    }

    pub fn webhook(&self) -> Option<&Webhook> {
        match &self.state {
            InspectorState::Loaded { webhook, .. } | InspectorState::Empty { webhook } => {
                Some(webhook)
            }
            _ => None,
        }
    }
}

impl Default for RequestInspector {
    fn default() -> Self {
        Self::new()
    }
}
