//! Free-tier prompt budget: cut outgoing prompts to a character limit.

/// Maximum characters sent to the inference endpoint on the free tier.
pub const FREE_TIER_LIMIT: usize = 256;

/// Cuts `prompt` to at most `limit` characters.
///
/// Counts characters, not bytes, so the cut never lands inside a
/// multi-byte code point. Not word-aware. Idempotent for a fixed `limit`:
/// `enforce(enforce(s, l), l) == enforce(s, l)`.
pub fn enforce_free_tier_limit(prompt: &str, limit: usize) -> String {
    match prompt.char_indices().nth(limit) {
        Some((cut, _)) => prompt[..cut].to_string(),
        None => prompt.to_string(),
    }
}
