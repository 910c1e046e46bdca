use std::sync::Arc;

use common::{CreateWebhookPayload, CreatedWebhook, UpdateWebhookPayload, Webhook, WebhookRequest};
use reqwest::Client;

use crate::auth::AuthContext;
use crate::error::{check_status, RequestError};

/// The backend operations the view-models depend on. `HookinatorClient` is
/// the production implementation; tests substitute an in-memory one.
pub trait WebhookApi {
    async fn list_webhooks(&self, auth: &AuthContext) -> Result<Vec<Webhook>, RequestError>;

    async fn get_webhook(
        &self,
        webhook_id: &str,
        auth: &AuthContext,
    ) -> Result<Webhook, RequestError>;

    async fn create_webhook(
        &self,
        payload: &CreateWebhookPayload,
        auth: &AuthContext,
    ) -> Result<CreatedWebhook, RequestError>;

    async fn update_webhook(
        &self,
        webhook_id: &str,
        updates: &UpdateWebhookPayload,
        auth: &AuthContext,
    ) -> Result<(), RequestError>;

    async fn delete_webhook(
        &self,
        webhook_id: &str,
        auth: &AuthContext,
    ) -> Result<(), RequestError>;

    async fn get_webhook_requests(
        &self,
        webhook_id: &str,
        auth: &AuthContext,
    ) -> Result<Vec<WebhookRequest>, RequestError>;

    /// Public ingestion URL for a webhook id, shown alongside each endpoint.
    fn ingest_url(&self, webhook_id: &str) -> String;
}

pub struct HookinatorClient {
    pub client: Arc<Client>,
    pub api_url: String,
}

impl HookinatorClient {
    pub fn new(api_url: &str) -> Self {
        HookinatorClient {
            client: Arc::new(Client::new()),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn bearer_header(auth: &AuthContext) -> String {
        format!("Bearer {}", auth.bearer())
    }
}

impl WebhookApi for HookinatorClient {
    async fn list_webhooks(&self, auth: &AuthContext) -> Result<Vec<Webhook>, RequestError> {
        let response = self
            .client
            .get(format!("{}/webhooks", self.api_url))
            .header("Authorization", Self::bearer_header(auth))
            .send()
            .await?;

        let response = check_status(response).await?;

        // The backend returns a JSON null when the caller owns no webhooks.
        let webhooks: Option<Vec<Webhook>> = response.json().await?;
        Ok(webhooks.unwrap_or_default())
    }

    async fn get_webhook(
        &self,
        webhook_id: &str,
        auth: &AuthContext,
    ) -> Result<Webhook, RequestError> {
        let response = self
            .client
            .get(format!("{}/webhook/{}", self.api_url, webhook_id))
            .header("Authorization", Self::bearer_header(auth))
            .send()
            .await?;

        let response = check_status(response).await?;
        let webhook = response.json().await?;
        Ok(webhook)
    }

    async fn create_webhook(
        &self,
        payload: &CreateWebhookPayload,
        auth: &AuthContext,
    ) -> Result<CreatedWebhook, RequestError> {
        let response = self
            .client
            .post(format!("{}/create", self.api_url))
            .header("Authorization", Self::bearer_header(auth))
            .json(payload)
            .send()
            .await?;

        let response = check_status(response).await?;
        let created: CreatedWebhook = response.json().await?;

        log::info!("created webhook endpoint {}", created.webhook_url);
        Ok(created)
    }

    async fn update_webhook(
        &self,
        webhook_id: &str,
        updates: &UpdateWebhookPayload,
        auth: &AuthContext,
    ) -> Result<(), RequestError> {
        let response = self
            .client
            .put(format!("{}/webhooks/{}", self.api_url, webhook_id))
            .header("Authorization", Self::bearer_header(auth))
            .json(updates)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn delete_webhook(
        &self,
        webhook_id: &str,
        auth: &AuthContext,
    ) -> Result<(), RequestError> {
        let response = self
            .client
            .delete(format!("{}/webhooks/{}", self.api_url, webhook_id))
            .header("Authorization", Self::bearer_header(auth))
            .send()
            .await?;

        check_status(response).await?;

        log::info!("deleted webhook {webhook_id}");
        Ok(())
    }

    async fn get_webhook_requests(
        &self,
        webhook_id: &str,
        auth: &AuthContext,
    ) -> Result<Vec<WebhookRequest>, RequestError> {
        let response = self
            .client
            .get(format!("{}/inspect/{}", self.api_url, webhook_id))
            .header("Authorization", Self::bearer_header(auth))
            .send()
            .await?;

        let response = check_status(response).await?;

        // Most-recent-first, or null when nothing has been received yet.
        let requests: Option<Vec<WebhookRequest>> = response.json().await?;
        Ok(requests.unwrap_or_default())
    }

    fn ingest_url(&self, webhook_id: &str) -> String {
        format!("{}/webhook/{}", self.api_url, webhook_id)
    }
}
