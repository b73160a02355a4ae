use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en-US".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub patron_text: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    #[serde(default = "default_language")]
    pub selected_language: String,
}

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Warm,
    Friendly,
    Enthusiastic,
}

// One candidate reply the staff member can pick from; every generate
// response carries exactly four of these, one per tone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseOption {
    pub response: String,
    pub tone: Tone,
}
