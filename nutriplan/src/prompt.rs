//! Prompt construction: fold the profile and query into the fixed plan
//! template. Pure string work; the length budget lives in [`crate::limit`].

use crate::profile::Profile;

/// Formats weight/height for the template. Debug formatting keeps the
/// trailing `.0` on whole numbers (`W:70.0kg`, not `W:70kg`).
fn fmt_metric(value: f64) -> String {
    format!("{value:?}")
}

/// Builds the engineered prompt for one query against a profile.
///
/// The query is trimmed of leading/trailing whitespace; internal
/// whitespace is preserved. Total function: no validation, no escaping,
/// no length checks.
pub fn refine_prompt(query: &str, profile: &Profile) -> String {
    format!(
        "Details: W:{}kg, H:{}cm, Act:{}; Restr:{}; Goal:{}.\n\
         Query: {}.\n\
         Plan: Provide calorie intake, nutrient (g) breakdown, meal suggestions, and guidelines.",
        fmt_metric(profile.weight_kg),
        fmt_metric(profile.height_cm),
        profile.activity,
        profile.restriction,
        profile.goal,
        query.trim(),
    )
}
