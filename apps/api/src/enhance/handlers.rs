//! Axum route handlers for the enhancement API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::templates::Section;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_content: String,
    pub original_content: String,
    pub section: String,
}

/// POST /ai-enhance
///
/// Rewrites one section's text with a canned template.
pub async fn handle_enhance(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    if request.content.trim().is_empty() {
        return Err(AppError::Validation("Content cannot be empty".to_string()));
    }
    if request.section.parse::<Section>().is_err() {
        let allowed: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();
        return Err(AppError::Validation(format!(
            "Invalid section. Must be one of: {}",
            allowed.join(", ")
        )));
    }

    let enhanced_content = state.enhancer.enhance(&request.section, &request.content);

    Ok(Json(EnhanceResponse {
        enhanced_content,
        original_content: request.content,
        section: request.section,
    }))
}
