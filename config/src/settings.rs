//! Typed settings read from the environment after
//! [`load_and_apply`](crate::load_and_apply) has merged the sources.

use thiserror::Error;

/// Environment variable holding the Hugging Face bearer token.
pub const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";

/// Optional override for the free-tier character budget.
pub const FREE_TIER_LIMIT_VAR: &str = "FREE_TIER_LIMIT";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Hugging Face API key not found. Please set HUGGINGFACE_API_KEY in the environment, .env, or config.toml.")]
    MissingApiKey,
    #[error("invalid FREE_TIER_LIMIT value: {0}")]
    InvalidLimit(String),
}

/// Settings every front end needs before serving a single form.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Bearer token for the inference endpoint. Required.
    pub api_key: String,
    /// Override for the outgoing-prompt character budget; `None` means the
    /// planner default (256).
    pub free_tier_limit: Option<usize>,
}

impl Settings {
    /// Reads settings from the environment. A missing or empty API key is
    /// a hard error: without it the process must refuse to serve.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(SettingsError::MissingApiKey)?;

        let free_tier_limit = match std::env::var(FREE_TIER_LIMIT_VAR) {
            Ok(raw) => Some(raw.parse().map_err(|_| SettingsError::InvalidLimit(raw))?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            free_tier_limit,
        })
    }
}
