pub mod claude;
pub mod config;
pub mod fallback;
pub mod language;
pub mod tts;
pub mod web;

use claude::ClaudeClient;
use config::AppConfig;
use tts::TtsClient;

// Read-only shared state, built once from the environment at startup.
// `None` means the corresponding credential was absent and that endpoint
// runs degraded (fallback text, or an explicit not-configured error).
pub struct AppState {
    pub claude: Option<ClaudeClient>,
    pub tts: Option<TtsClient>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            claude: config.anthropic_api_key.clone().map(ClaudeClient::new),
            tts: config.google_tts_api_key.clone().map(TtsClient::new),
        }
    }
}
