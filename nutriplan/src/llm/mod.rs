//! Inference client abstraction for the plan pipeline.
//!
//! The pipeline depends on a callable that turns one prompt into one block
//! of generated text; this module defines the trait, the Hugging Face
//! implementation, and a mock for tests.

mod hf;
mod mock;

pub use hf::HfInference;
pub use mock::MockInference;

use async_trait::async_trait;

/// Text generation client: one prompt in, one response string out.
///
/// Failures travel inside the returned string as `"Error: ..."` text, not
/// as a typed error: callers render whatever comes back and cannot
/// distinguish transport failure from API failure except by reading the
/// text. Implementations: [`HfInference`] (hosted Inference API),
/// [`MockInference`] (fixed reply, records prompts).
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generates a completion for `prompt` with a single remote call.
    async fn generate(&self, prompt: &str) -> String;
}
