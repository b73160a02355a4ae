use anyhow::Result;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Value};

use crate::language::Language;
use crate::web::models::{ConversationTurn, ResponseOption};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const MODEL: &str = "claude-haiku-4-5-20251001";
const MAX_TOKENS: u32 = 1000;

// Only the last few turns are worth sending back as context.
const CONTEXT_TURNS: usize = 4;

// Client for the Anthropic Messages API. One call per generate request,
// no retries; the caller recovers via the fallback classifier.
pub struct ClaudeClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl ClaudeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, MESSAGES_URL.to_string())
    }

    // Lets tests aim the client at a mock or unreachable endpoint.
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
        }
    }

    pub async fn generate(
        &self,
        patron_text: &str,
        history: &[ConversationTurn],
        language: Language,
    ) -> Result<Vec<ResponseOption>> {
        info!("Generating options in {}", language.name());

        let prompt = build_prompt(patron_text, history, language);
        debug!("Prompt: {}", prompt);

        let payload = json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [{"role": "user", "content": prompt}]
        });

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API request failed ({}): {}", status, error_text));
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let content = response_json
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|block| block.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| anyhow::anyhow!("Failed to extract text from response"))?;

        let options: Vec<ResponseOption> = serde_json::from_str(&strip_code_fences(content))?;
        info!("Received {} response options", options.len());
        Ok(options)
    }
}

// The model sometimes wraps its JSON array in markdown fences.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

fn build_prompt(patron_text: &str, history: &[ConversationTurn], language: Language) -> String {
    let context = history[history.len().saturating_sub(CONTEXT_TURNS)..]
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.text))
        .collect::<Vec<_>>()
        .join("\n");

    let name = language.name();
    let instruction = language.script_instruction();

    format!(
        r#"You are helping Pooja, a hotel staff member who cannot speak. A patron just said: "{patron_text}"

Context: Pooja works at the chai/tea area in a Double Tree Hilton hotel in Jaipur, India. She is warm, professional, and hospitable.

ABSOLUTE LANGUAGE REQUIREMENT - THIS IS CRITICAL:
- The patron selected: {name}
- You MUST respond ONLY in {name} using {instruction}
- EVERY SINGLE WORD must be in {name}
- DO NOT use ANY Hindi words if responding in Tamil
- DO NOT use ANY Tamil words if responding in Hindi
- DO NOT use ANY English words unless responding in English
- DO NOT mix scripts - use ONLY ONE script throughout

SCRIPT RULES:
- Tamil responses: Use ONLY Tamil script (தமிழ் எழுத்துகள்) - Example: "{tamil_example}"
- Hindi responses: Use ONLY Devanagari script (देवनागरी) - Example: "{hindi_example}"
- English responses: Use ONLY English alphabet

Generate EXACTLY 4 response options. Each should be:
- Written 100% in {instruction} with ZERO words from other languages
- Appropriate for hotel hospitality (tea service)
- Natural and conversational in {name}
- Concise (1-2 sentences)
- Different tones: formal, warm, friendly, enthusiastic

Previous context: {context}

Return ONLY valid JSON array:
[
  {{"response": "PURE {name} response here", "tone": "formal"}},
  {{"response": "PURE {name} response here", "tone": "warm"}},
  {{"response": "PURE {name} response here", "tone": "friendly"}},
  {{"response": "PURE {name} response here", "tone": "enthusiastic"}}
]"#,
        tamil_example = Language::Tamil.example(),
        hindi_example = Language::Hindi.example(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: &str, text: &str) -> ConversationTurn {
        ConversationTurn {
            role: role.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn prompt_context_keeps_only_the_last_four_turns() {
        let history = vec![
            turn("patron", "one"),
            turn("pooja", "two"),
            turn("patron", "three"),
            turn("pooja", "four"),
            turn("patron", "five"),
            turn("pooja", "six"),
        ];
        let prompt = build_prompt("Another chai please", &history, Language::English);
        assert!(!prompt.contains("patron: one"));
        assert!(!prompt.contains("pooja: two"));
        assert!(prompt.contains("patron: three"));
        assert!(prompt.contains("pooja: six"));
    }

    #[test]
    fn prompt_carries_the_selected_language() {
        let prompt = build_prompt("நன்றி", &[], Language::Tamil);
        assert!(prompt.contains("The patron selected: Tamil"));
        assert!(prompt.contains("Tamil in Tamil script"));
    }

    #[test]
    fn empty_history_builds_a_prompt() {
        let prompt = build_prompt("Hello", &[], Language::English);
        assert!(prompt.contains("Previous context: \n"));
    }

    #[test]
    fn code_fences_are_stripped() {
        let fenced = "```json\n[{\"response\": \"Hi\", \"tone\": \"formal\"}]\n```";
        assert_eq!(
            strip_code_fences(fenced),
            "[{\"response\": \"Hi\", \"tone\": \"formal\"}]"
        );
        assert_eq!(strip_code_fences("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn fenced_payload_parses_into_options() {
        let fenced = "```json\n[\n  {\"response\": \"Welcome\", \"tone\": \"formal\"},\n  {\"response\": \"Hi there\", \"tone\": \"warm\"}\n]\n```";
        let options: Vec<ResponseOption> =
            serde_json::from_str(&strip_code_fences(fenced)).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].response, "Welcome");
    }
}
