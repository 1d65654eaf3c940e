//! Axum route handlers for the Humanize API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::humanize::{TargetVoice, TextInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HumanizeRequest {
    #[serde(default)]
    pub text: TextInput,
    pub target_voice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HumanizeResponse {
    pub text: String,
    /// False when the engine failed open and `text` is the untouched input.
    pub humanized: bool,
    pub voice: Option<TargetVoice>,
}

#[derive(Debug, Deserialize)]
pub struct TransformVoiceRequest {
    pub text: String,
    pub target_voice: String,
}

#[derive(Debug, Serialize)]
pub struct TransformVoiceResponse {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/humanize
///
/// Folds contractions and casual idioms into the text, then optionally rewrites voice.
/// Accepts either a bare string or an object with `text`/`query`/`description`/`url`.
pub async fn handle_humanize(
    State(state): State<AppState>,
    Json(request): Json<HumanizeRequest>,
) -> Result<Json<HumanizeResponse>, AppError> {
    if request.text.is_blank() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let voice = request
        .target_voice
        .as_deref()
        .map(parse_voice)
        .transpose()?;

    let outcome = state.transformer.process(&request.text.coerce(), voice);

    Ok(Json(HumanizeResponse {
        text: outcome.text,
        humanized: outcome.succeeded,
        voice,
    }))
}

/// POST /api/v1/transform-voice
///
/// Best-effort active/passive rewrite of simple sentences. Non-matching sentences are
/// returned untouched.
pub async fn handle_transform_voice(
    State(state): State<AppState>,
    Json(request): Json<TransformVoiceRequest>,
) -> Result<Json<TransformVoiceResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let voice = parse_voice(&request.target_voice)?;
    let text = state.transformer.rewrite_voice(&request.text, voice);

    Ok(Json(TransformVoiceResponse { text }))
}

fn parse_voice(raw: &str) -> Result<TargetVoice, AppError> {
    raw.parse::<TargetVoice>()
        .map_err(|e| AppError::Validation(e.to_string()))
}
