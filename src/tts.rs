use anyhow::Result;
use log::info;
use reqwest::Client;
use serde_json::{json, Value};

use crate::language::Language;

const SYNTHESIZE_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

// Client for the Google Cloud Text-to-Speech REST API. The key travels as
// a query parameter, matching the API-key flavor of that API.
pub struct TtsClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl TtsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, SYNTHESIZE_URL.to_string())
    }

    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
        }
    }

    // Returns the base64-encoded MP3 payload. Pitch is raised for a
    // younger-sounding voice.
    pub async fn synthesize(&self, text: &str, language: &str) -> Result<String> {
        let voice = Language::from_code(language).voice();
        info!("Synthesizing speech with voice {}", voice.name);

        let payload = json!({
            "input": {"text": text},
            "voice": {
                "languageCode": voice.language_code,
                "name": voice.name,
                "ssmlGender": voice.ssml_gender
            },
            "audioConfig": {
                "audioEncoding": "MP3",
                "pitch": 3.0,
                "speakingRate": 1.0
            }
        });

        let url = format!("{}?key={}", self.api_url, self.api_key);
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("TTS request failed ({}): {}", status, error_text));
        }

        let response_json: Value = response.json().await?;
        let audio = response_json
            .get("audioContent")
            .and_then(|content| content.as_str())
            .ok_or_else(|| anyhow::anyhow!("Response is missing audioContent"))?;

        info!("Generated {} bytes of base64 audio", audio.len());
        Ok(audio.to_string())
    }
}
