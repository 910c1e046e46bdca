use chrono::{DateTime, Utc};
use client::{AuthContext, WebhookApi};
use futures::future::join_all;

/// One row of the dashboard endpoint table: a webhook plus its derived
/// request count and the time it last received anything.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookOverview {
    pub id: String,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub request_count: usize,
    pub last_request_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_webhooks: usize,
    pub total_requests: usize,
    pub active_today: usize,
}

impl DashboardStats {
    /// Derived purely from an overview snapshot. A webhook is active today
    /// when its most recent request falls on the same UTC calendar day as
    /// `now`.
    pub fn from_overview(overview: &[WebhookOverview], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        DashboardStats {
            total_webhooks: overview.len(),
            total_requests: overview.iter().map(|hook| hook.request_count).sum(),
            active_today: overview
                .iter()
                .filter(|hook| {
                    hook.last_request_at
                        .is_some_and(|at| at.date_naive() == today)
                })
                .count(),
        }
    }
}

/// Loads the dashboard overview: the caller's webhooks with request counts.
///
/// The request history of every webhook is fetched concurrently, one call
/// per webhook. A webhook whose history fetch fails is shown with a count
/// of zero rather than failing the whole view; the failure is logged at
/// warn so it stays visible in operation. A failure of the initial list
/// fetch yields the empty overview.
pub async fn load_overview<A: WebhookApi>(api: &A, auth: &AuthContext) -> Vec<WebhookOverview> {
    let webhooks = match api.list_webhooks(auth).await {
        Ok(webhooks) => webhooks,
        Err(error) => {
            log::error!("failed to fetch webhooks: {error}");
            return Vec::new();
        }
    };

    let fetches = webhooks.iter().map(|hook| async move {
        match api.get_webhook_requests(&hook.id, auth).await {
            // History is most-recent-first, so the head carries the latest timestamp.
            Ok(requests) => (requests.len(), requests.first().map(|r| r.timestamp)),
            Err(error) => {
                log::warn!("failed to fetch requests for webhook {}: {error}", hook.id);
                (0, None)
            }
        }
    });
    let counts = join_all(fetches).await;

    webhooks
        .into_iter()
        .zip(counts)
        .map(|(hook, (request_count, last_request_at))| WebhookOverview {
            url: api.ingest_url(&hook.id),
            id: hook.id,
            name: hook.name,
            created_at: hook.created_at,
            request_count,
            last_request_at,
        })
        .collect()
}
