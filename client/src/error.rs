use common::ApiErrorBody;
use thiserror::Error;

pub use reqwest::StatusCode;

/// Failure of a single API call. Calls are single-shot: no retries and no
/// timeouts, the caller decides what to do with the error.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{message} (status {status})")]
    Api { status: StatusCode, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RequestError {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        RequestError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Api { status, .. } => Some(*status),
            RequestError::Transport(error) => error.status(),
        }
    }
}

/// Turns a non-2xx response into `RequestError::Api`, keeping the backend's
/// `{"error": ...}` message when the body carries one.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    Err(RequestError::Api { status, message })
}
