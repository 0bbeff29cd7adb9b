//! # nutriplan
//!
//! Core of the AI nutrition diet planner: fold a patient profile and a
//! free-text query into a fixed prompt template, enforce the free-tier
//! character budget, send the prompt to the Hugging Face Inference API in
//! one blocking call, and pass the reply through a verification stub.
//!
//! The pipeline is a straight line with no state between submissions:
//!
//! ```text
//! query + Profile -> refine_prompt -> enforce_free_tier_limit
//!                 -> InferenceClient::generate -> Verifier::verify
//! ```
//!
//! ## Main modules
//!
//! - [`profile`]: [`Profile`], [`ActivityLevel`], [`Gender`], [`PatientInfo`]: form-bound types.
//! - [`prompt`]: [`refine_prompt`]: the fixed plan template.
//! - [`limit`]: [`enforce_free_tier_limit`], [`FREE_TIER_LIMIT`]: the character budget.
//! - [`llm`]: [`InferenceClient`] trait with [`HfInference`] (real API) and [`MockInference`] (tests).
//! - [`verify`]: [`Verifier`] trait and the [`MedicalDbVerifier`] stub.
//! - [`pipeline`]: [`run_plan`] composing the above into a [`PlanExchange`].
//!
//! Key types are re-exported at the crate root:
//! `use nutriplan::{run_plan, Profile, HfInference, MedicalDbVerifier};`

pub mod limit;
pub mod llm;
pub mod pipeline;
pub mod profile;
pub mod prompt;
pub mod verify;

pub use limit::{enforce_free_tier_limit, FREE_TIER_LIMIT};
pub use llm::{HfInference, InferenceClient, MockInference};
pub use pipeline::{run_plan, PlanError, PlanExchange};
pub use profile::{ActivityLevel, Gender, PatientInfo, Profile, AGE_MAX};
pub use prompt::refine_prompt;
pub use verify::{MedicalDbVerifier, Verification, Verifier, VERIFICATION_MESSAGE};
