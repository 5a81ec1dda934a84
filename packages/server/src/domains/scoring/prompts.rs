//! Prompt templates for LLM page scoring.

use super::models::Criteria;

pub const HTML_START: &str = "<<<HTML_START>>>";
pub const HTML_END: &str = "<<<HTML_END>>>";

/// System prompt shared by every scoring call.
pub const SCORING_SYSTEM_PROMPT: &str = r#"You are an assistant that evaluates marketing landing pages.
Score each requested criterion from 1 to 10 and give concise, actionable feedback (max ~25 words each).
Be consistent and fair across pages. When content is missing, explain briefly.
Return ONLY valid JSON. Use integers for scores."#;

const OUTPUT_SHAPE: &str = r#"{
  "scores": {
    "<criterion>": { "score": <int 1-10>, "feedback": "<string>" }
  },
  "overall": <float>,
  "notes": "<short rationale>"
}"#;

/// The two text blocks sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringPrompt {
    pub system: String,
    pub user: String,
}

/// Build the scoring prompt. The HTML is embedded untruncated.
pub fn build_scoring_prompt(html: &str, url: Option<&str>, criteria: &Criteria) -> ScoringPrompt {
    let criteria_list = criteria
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        "Evaluate the landing page below.\n\
         URL: {url}\n\
         \n\
         Criteria:\n\
         {criteria_list}\n\
         \n\
         Return a JSON object with:\n\
         {OUTPUT_SHAPE}\n\
         \n\
         Page HTML (truncated OK):\n\
         {HTML_START}\n\
         {html}\n\
         {HTML_END}",
        url = url.unwrap_or("N/A"),
    );

    ScoringPrompt {
        system: SCORING_SYSTEM_PROMPT.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_layout() {
        let criteria: Criteria = ["clarity", "tone"].into_iter().collect();
        let prompt = build_scoring_prompt("<h1>Hi</h1>", Some("https://acme.test"), &criteria);

        assert!(prompt.user.starts_with("Evaluate the landing page below.\nURL: https://acme.test\n"));
        assert!(prompt.user.contains("Criteria:\n- clarity\n- tone\n"));
        assert!(prompt.user.contains("\"overall\": <float>"));
        assert!(prompt
            .user
            .ends_with("<<<HTML_START>>>\n<h1>Hi</h1>\n<<<HTML_END>>>"));
    }

    #[test]
    fn test_missing_url_is_na() {
        let prompt = build_scoring_prompt("", None, &Criteria::default());
        assert!(prompt.user.contains("URL: N/A\n"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        let prompt = build_scoring_prompt("", None, &Criteria::default());
        assert!(prompt.system.contains("Return ONLY valid JSON"));
        assert!(prompt.system.contains("1 to 10"));
    }

    #[test]
    fn test_html_is_not_truncated() {
        let html = "x".repeat(200_000);
        let prompt = build_scoring_prompt(&html, None, &Criteria::default());
        assert!(prompt.user.contains(&html));
    }
}
