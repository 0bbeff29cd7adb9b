//! HTML pages: the embedded intake form plus rendered result and error
//! pages. Everything user-derived is escaped before interpolation.

use nutriplan::{PlanExchange, Profile};

/// Intake form page, embedded at compile time.
pub(crate) const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Escapes text for HTML bodies and attribute values.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>body{{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}}\
         pre{{background:#f4f4f4;padding:1rem;white-space:pre-wrap}}\
         .warning{{color:#a15c00}}.success{{color:#1a7f37}}.error{{color:#b00020}}</style>\n\
         </head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn verification_line(exchange: &PlanExchange, success_label: &str, warning_label: &str) -> String {
    let message = escape_html(&exchange.verification.message);
    if exchange.verification.verified {
        format!("<p class=\"success\">{success_label}: {message}</p>")
    } else {
        format!("<p class=\"warning\">{warning_label}: {message}</p>")
    }
}

const TRUNCATION_WARNING: &str =
    "Your nutrition query was automatically truncated to meet the free-tier limit.";
const FOLLOWUP_TRUNCATION_WARNING: &str =
    "Your follow-up input was automatically truncated to meet the free-tier limit.";

/// Result page for the primary submission: every pipeline artifact in
/// order, then the follow-up form carrying the profile in hidden fields.
pub(crate) fn plan_page(profile: &Profile, exchange: &PlanExchange) -> String {
    let mut body = String::new();
    body.push_str("<h1>AI Nutrition Diet Planner</h1>\n");
    body.push_str("<h2>Processing your input...</h2>\n");

    body.push_str("<p><strong>Engineered Prompt (before free-tier enforcement):</strong></p>\n");
    body.push_str(&format!("<pre>{}</pre>\n", escape_html(&exchange.prompt)));

    body.push_str(&format!(
        "<p><strong>Total Prompt Length:</strong> {} characters</p>\n",
        exchange.sent_chars
    ));
    if exchange.truncated {
        body.push_str(&format!("<p class=\"warning\">{TRUNCATION_WARNING}</p>\n"));
        body.push_str("<p><strong>Prompt Sent (after free-tier enforcement):</strong></p>\n");
        body.push_str(&format!(
            "<pre>{}</pre>\n",
            escape_html(&exchange.sent_prompt)
        ));
    }

    body.push_str("<p><strong>Response:</strong></p>\n");
    body.push_str(&format!("<pre>{}</pre>\n", escape_html(&exchange.response)));

    body.push_str(&verification_line(
        exchange,
        "Verification Successful",
        "Verification Warning",
    ));

    body.push_str("<hr>\n<h2>Need Further Clarification?</h2>\n");
    body.push_str(&followup_form(profile));
    body.push_str("<p><a href=\"/\">Start over</a></p>\n");

    shell("AI Nutrition Diet Planner", &body)
}

/// Result page for the follow-up: the enforced prompt (the original page
/// shows the follow-up prompt only after enforcement), then the rest.
pub(crate) fn followup_page(exchange: &PlanExchange) -> String {
    let mut body = String::new();
    body.push_str("<h1>AI Nutrition Diet Planner</h1>\n");

    body.push_str(
        "<p><strong>Refined Follow-Up Prompt (after free-tier enforcement):</strong></p>\n",
    );
    body.push_str(&format!(
        "<pre>{}</pre>\n",
        escape_html(&exchange.sent_prompt)
    ));

    body.push_str(&format!(
        "<p><strong>Total Follow-Up Prompt Length:</strong> {} characters</p>\n",
        exchange.sent_chars
    ));
    if exchange.truncated {
        body.push_str(&format!(
            "<p class=\"warning\">{FOLLOWUP_TRUNCATION_WARNING}</p>\n"
        ));
    }

    body.push_str("<p><strong>Follow-Up Response:</strong></p>\n");
    body.push_str(&format!("<pre>{}</pre>\n", escape_html(&exchange.response)));

    body.push_str(&verification_line(
        exchange,
        "Follow-Up Response Verified",
        "Follow-Up Verification Warning",
    ));
    body.push_str("<p><a href=\"/\">Start over</a></p>\n");

    shell("AI Nutrition Diet Planner - Follow-Up", &body)
}

/// Inline validation failure. No outbound call was made.
pub(crate) fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>AI Nutrition Diet Planner</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to the form</a></p>",
        escape_html(message)
    );
    shell("AI Nutrition Diet Planner - Error", &body)
}

/// Clarification form: one text field plus the profile as hidden fields so
/// the follow-up pass reuses the same stored values.
fn followup_form(profile: &Profile) -> String {
    format!(
        "<form method=\"post\" action=\"/followup\">\n\
         <input type=\"hidden\" name=\"weight\" value=\"{weight:?}\">\n\
         <input type=\"hidden\" name=\"height\" value=\"{height:?}\">\n\
         <input type=\"hidden\" name=\"activity\" value=\"{activity}\">\n\
         <input type=\"hidden\" name=\"restriction\" value=\"{restriction}\">\n\
         <input type=\"hidden\" name=\"goal\" value=\"{goal}\">\n\
         <label for=\"clarification\">Provide any additional details or clarifications</label><br>\n\
         <input type=\"text\" id=\"clarification\" name=\"clarification\" size=\"60\"><br>\n\
         <button type=\"submit\">Submit clarification</button>\n\
         </form>\n",
        weight = profile.weight_kg,
        height = profile.height_cm,
        activity = escape_html(profile.activity.as_str()),
        restriction = escape_html(&profile.restriction),
        goal = escape_html(&profile.goal),
    )
}
