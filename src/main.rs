use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use pooja_backend::config::AppConfig;
use pooja_backend::web::routes;
use pooja_backend::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Pooja AI backend");

    let config = AppConfig::from_env();
    if config.anthropic_api_key.is_none() {
        warn!("ANTHROPIC_API_KEY not set, /api/generate will answer from the fallback set");
    }
    if config.google_tts_api_key.is_none() {
        warn!("GOOGLE_TTS_API_KEY not set, /api/tts will report itself unavailable");
    }

    let state = Data::new(AppState::from_config(&config));
    let cors_origins = config.cors_origins.clone();

    info!("Binding server to 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
