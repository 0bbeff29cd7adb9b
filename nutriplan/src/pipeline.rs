//! Submission pipeline: validate, build, truncate, send, verify. One pass
//! per query, nothing kept between passes.

use crate::limit::enforce_free_tier_limit;
use crate::llm::InferenceClient;
use crate::profile::Profile;
use crate::prompt::refine_prompt;
use crate::verify::{Verification, Verifier};

/// Pipeline failure. Remote-call problems are not here: they come back as
/// `"Error: ..."` text inside [`PlanExchange::response`].
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("query must not be empty")]
    EmptyQuery,
}

/// Artifacts of one query/response cycle, in submission order. Callers
/// display all of them; nothing outlives the render.
#[derive(Clone, Debug)]
pub struct PlanExchange {
    /// Engineered prompt before free-tier enforcement.
    pub prompt: String,
    /// Prompt actually sent (after enforcement).
    pub sent_prompt: String,
    /// Character count of the sent prompt.
    pub sent_chars: usize,
    /// True when enforcement cut the prompt.
    pub truncated: bool,
    /// Generated text, or `"Error: ..."` text from the client.
    pub response: String,
    /// Stub verification of the response.
    pub verification: Verification,
}

/// Runs the full pipeline for one query: build the prompt, enforce the
/// free-tier limit, call the model once, verify the reply.
///
/// A whitespace-only query fails with [`PlanError::EmptyQuery`] before any
/// outbound call. A follow-up clarification is the same operation run
/// again with the stored profile and the clarification as the query; no
/// conversation state carries between exchanges.
pub async fn run_plan(
    client: &dyn InferenceClient,
    verifier: &dyn Verifier,
    profile: &Profile,
    query: &str,
    limit: usize,
) -> Result<PlanExchange, PlanError> {
    if query.trim().is_empty() {
        return Err(PlanError::EmptyQuery);
    }

    let prompt = refine_prompt(query, profile);
    let sent_prompt = enforce_free_tier_limit(&prompt, limit);
    // Enforcement strictly shortens, so unequal lengths mean it cut.
    let truncated = sent_prompt.len() != prompt.len();
    let sent_chars = sent_prompt.chars().count();
    if truncated {
        tracing::info!(limit, sent_chars, "prompt truncated to free-tier limit");
    }

    let response = client.generate(&sent_prompt).await;
    let verification = verifier.verify(&response);

    Ok(PlanExchange {
        prompt,
        sent_prompt,
        sent_chars,
        truncated,
        response,
        verification,
    })
}
