//! In-memory `WebhookApi` used by the view-model tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use client::{AuthContext, RequestError, StatusCode, WebhookApi};
use common::{CreateWebhookPayload, CreatedWebhook, UpdateWebhookPayload, Webhook, WebhookRequest};

const MOCK_BASE_URL: &str = "http://mock.local";

pub fn webhook(id: &str, name: &str, created_at: DateTime<Utc>) -> Webhook {
    Webhook {
        id: id.to_string(),
        name: name.to_string(),
        source_type: "custom".to_string(),
        forward_url: None,
        created_at,
        user_id: "user-1".to_string(),
    }
}

pub fn request_at(timestamp: DateTime<Utc>) -> WebhookRequest {
    WebhookRequest {
        timestamp,
        method: "POST".to_string(),
        headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body: r#"{"event":"test"}"#.to_string(),
    }
}

pub struct MockApi {
    webhooks: Mutex<Vec<Webhook>>,
    /// Request history per webhook id, most-recent-first.
    requests: Mutex<HashMap<String, Vec<WebhookRequest>>>,
    failing_requests: Mutex<HashSet<String>>,
    list_failure: Mutex<Option<(StatusCode, String)>>,
    fetch_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi {
            webhooks: Mutex::new(Vec::new()),
            requests: Mutex::new(HashMap::new()),
            failing_requests: Mutex::new(HashSet::new()),
            list_failure: Mutex::new(None),
            fetch_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn insert_webhook(&self, webhook: Webhook) {
        self.webhooks.lock().unwrap().push(webhook);
    }

    pub fn push_request(&self, webhook_id: &str, request: WebhookRequest) {
        self.requests
            .lock()
            .unwrap()
            .entry(webhook_id.to_string())
            .or_default()
            .push(request);
    }

    pub fn fail_requests_for(&self, webhook_id: &str) {
        self.failing_requests
            .lock()
            .unwrap()
            .insert(webhook_id.to_string());
    }

    pub fn fail_list(&self, status: StatusCode, message: &str) {
        *self.list_failure.lock().unwrap() = Some((status, message.to_string()));
    }

    /// Number of network-shaped calls issued so far.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl WebhookApi for MockApi {
    async fn list_webhooks(&self, _auth: &AuthContext) -> Result<Vec<Webhook>, RequestError> {
        self.record_call();
        if let Some((status, message)) = self.list_failure.lock().unwrap().clone() {
            return Err(RequestError::api(status, message));
        }
        Ok(self.webhooks.lock().unwrap().clone())
    }

    async fn get_webhook(
        &self,
        webhook_id: &str,
        _auth: &AuthContext,
    ) -> Result<Webhook, RequestError> {
        self.record_call();
        self.webhooks
            .lock()
            .unwrap()
            .iter()
            .find(|hook| hook.id == webhook_id)
            .cloned()
            .ok_or_else(|| RequestError::api(StatusCode::NOT_FOUND, "Webhook not found"))
    }

    async fn create_webhook(
        &self,
        payload: &CreateWebhookPayload,
        _auth: &AuthContext,
    ) -> Result<CreatedWebhook, RequestError> {
        self.record_call();
        let id = format!("wh-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.insert_webhook(Webhook {
            id: id.clone(),
            name: payload.name.clone(),
            source_type: payload.source_type.clone(),
            forward_url: None,
            created_at: Utc::now(),
            user_id: "user-1".to_string(),
        });
        Ok(CreatedWebhook {
            webhook_url: format!("{MOCK_BASE_URL}/webhook/{id}"),
            inspect_url: format!("{MOCK_BASE_URL}/inspect/{id}"),
        })
    }

    async fn update_webhook(
        &self,
        webhook_id: &str,
        updates: &UpdateWebhookPayload,
        _auth: &AuthContext,
    ) -> Result<(), RequestError> {
        self.record_call();
        let mut webhooks = self.webhooks.lock().unwrap();
        let hook = webhooks
            .iter_mut()
            .find(|hook| hook.id == webhook_id)
            .ok_or_else(|| RequestError::api(StatusCode::NOT_FOUND, "Webhook not found"))?;
        if let Some(name) = &updates.name {
            hook.name = name.clone();
        }
        if let Some(forward_url) = &updates.forward_url {
            hook.forward_url = Some(forward_url.clone());
        }
        Ok(())
    }

    async fn delete_webhook(
        &self,
        webhook_id: &str,
        _auth: &AuthContext,
    ) -> Result<(), RequestError> {
        self.record_call();
        let mut webhooks = self.webhooks.lock().unwrap();
        let before = webhooks.len();
        webhooks.retain(|hook| hook.id != webhook_id);
        if webhooks.len() == before {
            return Err(RequestError::api(StatusCode::NOT_FOUND, "Webhook not found"));
        }
        self.requests.lock().unwrap().remove(webhook_id);
        Ok(())
    }

    async fn get_webhook_requests(
        &self,
        webhook_id: &str,
        _auth: &AuthContext,
    ) -> Result<Vec<WebhookRequest>, RequestError> {
        self.record_call();
        if self.failing_requests.lock().unwrap().contains(webhook_id) {
            return Err(RequestError::api(
                StatusCode::FORBIDDEN,
                "Webhook not found or access denied",
            ));
        }
        Ok(self
            .requests
            .lock()
            .unwrap()
            .get(webhook_id)
            .cloned()
            .unwrap_or_default())
    }

    fn ingest_url(&self, webhook_id: &str) -> String {
        format!("{MOCK_BASE_URL}/webhook/{webhook_id}")
    }
}
