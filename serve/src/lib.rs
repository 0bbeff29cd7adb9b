//! HTTP form server for nutriplan (axum).
//!
//! Serves the intake form on `GET /`, runs the plan pipeline on
//! `POST /plan` and `POST /followup`, and answers `GET /health`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`],
//! [`state_from_settings`], [`AppState`], [`router`].

mod app;
mod page;

pub use app::{router, AppState};

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use nutriplan::{HfInference, MedicalDbVerifier};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Builds the production state from [`config::Settings`]: real Hugging
/// Face client, stub verifier, configured character budget.
pub fn state_from_settings(settings: &config::Settings) -> Arc<AppState> {
    Arc::new(AppState {
        client: Arc::new(HfInference::new(settings.api_key.clone())),
        verifier: Arc::new(MedicalDbVerifier),
        limit: settings.free_tier_limit.unwrap_or(nutriplan::FREE_TIER_LIMIT),
    })
}

/// Runs the server on an existing listener. Used by tests: bind to
/// 127.0.0.1:0, then pass the listener and a state with a mock client.
pub async fn run_serve_on_listener(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("nutriplan listening on http://{}", addr);
    axum::serve(listener, app::router(state)).await?;
    Ok(())
}

/// Reads settings, binds `addr` (default 127.0.0.1:8080), and serves until
/// the process exits.
///
/// Settings are read before anything binds: a missing API key means no
/// listener and an error describing the fix.
pub async fn run_serve(addr: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = config::Settings::from_env()?;
    let state = state_from_settings(&settings);
    let addr = addr.unwrap_or(DEFAULT_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, state).await
}
