use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;

use crate::fallback::fallback_options;
use crate::language::Language;
use crate::web::models::{GenerateRequest, TtsRequest};
use crate::AppState;

// Liveness payload for deployment platforms
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "Pooja AI API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Generate four reply options for the patron's utterance. This endpoint
// never fails outright: without a configured key or on any upstream error
// it answers from the fallback classifier instead.
pub async fn generate(
    data: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    let language = Language::from_code(&req.selected_language);
    info!(
        "Generate request ({} -> {}): '{}'",
        req.selected_language,
        language.name(),
        preview(&req.patron_text)
    );

    let Some(claude) = &data.claude else {
        info!("No Anthropic API key configured, using fallback");
        return HttpResponse::Ok().json(json!({
            "success": true,
            "options": fallback_options(&req.patron_text),
            "fallback": true
        }));
    };

    match claude
        .generate(&req.patron_text, &req.conversation_history, language)
        .await
    {
        Ok(options) => HttpResponse::Ok().json(json!({
            "success": true,
            "options": options,
            "usedAPI": true
        })),
        Err(e) => {
            error!("Claude request failed: {}", e);
            HttpResponse::Ok().json(json!({
                "success": true,
                "options": fallback_options(&req.patron_text),
                "fallback": true,
                "error": e.to_string()
            }))
        }
    }
}

// Synthesize speech for a chosen reply. There is no offline fallback for
// audio, so failures surface directly.
pub async fn tts(data: web::Data<AppState>, req: web::Json<TtsRequest>) -> impl Responder {
    let Some(tts) = &data.tts else {
        return HttpResponse::Ok().json(json!({
            "success": false,
            "error": "Google TTS API key not configured"
        }));
    };

    match tts.synthesize(&req.text, &req.language).await {
        Ok(audio) => HttpResponse::Ok().json(json!({ "success": true, "audio": audio })),
        Err(e) => {
            error!("TTS request failed: {}", e);
            HttpResponse::Ok().json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

// Keep log lines short for long utterances.
fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
