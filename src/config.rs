use std::env;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

// Everything the process reads from its environment, resolved exactly once.
pub struct AppConfig {
    pub anthropic_api_key: Option<String>,
    pub google_tts_api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            google_tts_api_key: non_empty_var("GOOGLE_TTS_API_KEY"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(8000),
        }
    }
}

// An empty value is treated the same as an unset one.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn from_env_resolves_defaults_and_overrides() {
        env::remove_var("ANTHROPIC_API_KEY");
        env::remove_var("GOOGLE_TTS_API_KEY");
        env::remove_var("CORS_ORIGINS");
        env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.anthropic_api_key, None);
        assert_eq!(config.google_tts_api_key, None);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
        assert_eq!(config.port, 8000);

        env::set_var("ANTHROPIC_API_KEY", "");
        env::set_var("GOOGLE_TTS_API_KEY", "key-123");
        env::set_var("CORS_ORIGINS", "https://pooja.example, https://staff.example");
        env::set_var("PORT", "9001");

        let config = AppConfig::from_env();
        assert_eq!(config.anthropic_api_key, None);
        assert_eq!(config.google_tts_api_key.as_deref(), Some("key-123"));
        assert_eq!(
            config.cors_origins,
            vec!["https://pooja.example", "https://staff.example"]
        );
        assert_eq!(config.port, 9001);

        env::remove_var("GOOGLE_TTS_API_KEY");
        env::remove_var("CORS_ORIGINS");
        env::remove_var("PORT");
    }
}
