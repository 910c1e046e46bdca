use anyhow::{bail, Context, Result};
use chrono::Utc;
use client::{exchange_google_token, AuthContext, HookinatorClient, WebhookApi};
use inspector::{load_overview, DashboardStats, InspectorState, RequestInspector};

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let api_url = std::env::var("HOOKINATOR_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let auth = resolve_auth(&api_url).await?;
    let api = HookinatorClient::new(&api_url);

    print_overview(&api, &auth).await;

    if let Some(webhook_id) = std::env::args().nth(1) {
        print_inspector(&api, &auth, &webhook_id).await;
    }

    Ok(())
}

/// Session token from `HOOKINATOR_TOKEN` when present, otherwise exchanged
/// from a Google identity token. Neither being set is a hard error.
async fn resolve_auth(api_url: &str) -> Result<AuthContext> {
    if let Ok(token) = std::env::var("HOOKINATOR_TOKEN") {
        log::debug!("using session token from environment");
        return Ok(AuthContext::new(token));
    }

    if let Ok(id_token) = std::env::var("GOOGLE_ID_TOKEN") {
        let auth = exchange_google_token(api_url, &id_token)
            .await
            .context("google login exchange failed")?;
        return Ok(auth);
    }

    bail!("not signed in: set HOOKINATOR_TOKEN or GOOGLE_ID_TOKEN");
}

async fn print_overview(api: &HookinatorClient, auth: &AuthContext) {
    let overview = load_overview(api, auth).await;
    let stats = DashboardStats::from_overview(&overview, Utc::now());

    println!(
        "Webhooks: {}   Requests: {}   Active today: {}",
        stats.total_webhooks, stats.total_requests, stats.active_today
    );
    println!();

    if overview.is_empty() {
        println!("No webhook endpoints yet. Create one to start inspecting requests.");
        return;
    }

    for hook in &overview {
        println!(
            "{:<14} {:<24} {:>6} requests   created {}",
            hook.id,
            hook.name,
            hook.request_count,
            hook.created_at.format("%Y-%m-%d %H:%M")
        );
        println!("    {}", hook.url);
    }
}

async fn print_inspector(api: &HookinatorClient, auth: &AuthContext, webhook_id: &str) {
    let inspector = RequestInspector::load(api, auth, webhook_id).await;

    println!();
    match inspector.state() {
        InspectorState::Loaded { webhook, requests, .. } => {
            println!("{} ({} requests)", webhook.name, requests.len());
            if let Some(request) = inspector.selected_request() {
                println!(
                    "Latest: {} at {}",
                    request.method,
                    request.timestamp.format("%Y-%m-%d %H:%M:%S")
                );
                for (name, value) in &request.headers {
                    println!("  {name}: {value}");
                }
                println!("{}", request.body);
            }
        }
        InspectorState::Empty { webhook } => {
            println!("{}: no requests received yet", webhook.name);
            println!("Send something to {}", api.ingest_url(&webhook.id));
        }
        InspectorState::Failed { error } => eprintln!("Failed to inspect {webhook_id}: {error}"),
        InspectorState::Loading => {}
    }
}
