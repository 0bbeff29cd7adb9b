//! Axum app: shared state, router, and the two form handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;

use nutriplan::{run_plan, Gender, InferenceClient, PatientInfo, PlanError, Profile, Verifier};

use crate::page;

/// Shared state for the form server.
///
/// Everything here is immutable after startup; handlers only read. The
/// client trait object is the seam tests use to swap in a mock.
pub struct AppState {
    pub client: Arc<dyn InferenceClient>,
    pub verifier: Arc<dyn Verifier>,
    /// Character budget applied to every outgoing prompt.
    pub limit: usize,
}

/// Builds the router: form page, the two submissions, and a health probe.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/plan", post(plan))
        .route("/followup", post(followup))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Primary submission: patient information, profile, and the query.
#[derive(Debug, Deserialize)]
pub(crate) struct PlanForm {
    #[serde(default)]
    name: String,
    age: u8,
    gender: String,
    weight: f64,
    height: f64,
    activity: String,
    restriction: String,
    goal: String,
    query: String,
}

/// Follow-up submission: the clarification plus the profile echoed back in
/// hidden fields. No conversation state beyond these fields.
#[derive(Debug, Deserialize)]
pub(crate) struct FollowupForm {
    weight: f64,
    height: f64,
    activity: String,
    restriction: String,
    goal: String,
    clarification: String,
}

fn build_profile(
    weight: f64,
    height: f64,
    activity: &str,
    restriction: &str,
    goal: &str,
) -> Result<Profile, String> {
    if weight < 0.0 {
        return Err("weight must be 0 or more".to_string());
    }
    if height < 0.0 {
        return Err("height must be 0 or more".to_string());
    }
    Ok(Profile {
        weight_kg: weight,
        height_cm: height,
        activity: activity.parse()?,
        restriction: restriction.to_string(),
        goal: goal.to_string(),
    })
}

fn invalid(message: &str) -> (StatusCode, Html<String>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(page::error_page(message)),
    )
}

async fn plan(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PlanForm>,
) -> (StatusCode, Html<String>) {
    let gender: Gender = match form.gender.parse() {
        Ok(g) => g,
        Err(e) => return invalid(&e),
    };
    let patient = match PatientInfo::new(form.name.clone(), form.age, gender) {
        Ok(p) => p,
        Err(e) => return invalid(&e),
    };
    let profile = match build_profile(
        form.weight,
        form.height,
        &form.activity,
        &form.restriction,
        &form.goal,
    ) {
        Ok(p) => p,
        Err(e) => return invalid(&e),
    };

    tracing::info!(age = patient.age, "plan submitted");
    match run_plan(
        state.client.as_ref(),
        state.verifier.as_ref(),
        &profile,
        &form.query,
        state.limit,
    )
    .await
    {
        Ok(exchange) => (StatusCode::OK, Html(page::plan_page(&profile, &exchange))),
        Err(PlanError::EmptyQuery) => {
            invalid("Please enter your nutrition query or dietary preferences.")
        }
    }
}

async fn followup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FollowupForm>,
) -> (StatusCode, Html<String>) {
    let profile = match build_profile(
        form.weight,
        form.height,
        &form.activity,
        &form.restriction,
        &form.goal,
    ) {
        Ok(p) => p,
        Err(e) => return invalid(&e),
    };

    match run_plan(
        state.client.as_ref(),
        state.verifier.as_ref(),
        &profile,
        &form.clarification,
        state.limit,
    )
    .await
    {
        Ok(exchange) => (StatusCode::OK, Html(page::followup_page(&exchange))),
        Err(PlanError::EmptyQuery) => {
            invalid("Please provide additional details or clarifications.")
        }
    }
}
