use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{check_status, RequestError};

/// Explicit session context passed to every data-fetching call: the backend
/// bearer token and, when known, its expiry. Nothing here is persisted; the
/// token lives for the duration of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    pub fn new(token: impl Into<String>) -> Self {
        AuthContext {
            token: token.into(),
            expires_at: None,
        }
    }

    pub fn with_expiry(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        AuthContext {
            token: token.into(),
            expires_at: Some(expires_at),
        }
    }

    pub fn bearer(&self) -> &str {
        &self.token
    }

    /// A context with no known expiry is treated as live.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[derive(Serialize)]
struct GoogleLoginPayload<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct GoogleLoginResponse {
    jwt_token: String,
}

/// Exchanges a Google OAuth identity token for a backend-issued bearer token
/// via `POST /auth/google/login`. The backend does not report an expiry, so
/// the returned context carries none.
pub async fn exchange_google_token(
    api_url: &str,
    id_token: &str,
) -> Result<AuthContext, RequestError> {
    let client = Client::new();

    let response = client
        .post(format!("{api_url}/auth/google/login"))
        .json(&GoogleLoginPayload { token: id_token })
        .send()
        .await?;

    let response = check_status(response).await?;
    let body: GoogleLoginResponse = response.json().await?;

    log::debug!("exchanged google identity token for backend session");
    Ok(AuthContext::new(body.jwt_token))
}
