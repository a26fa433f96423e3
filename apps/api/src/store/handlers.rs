//! Axum route handlers for saving and retrieving resumes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::{Resume, StoredResume};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResumeResponse {
    pub message: String,
    pub resume_id: String,
}

/// POST /save-resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    payload: Result<Json<Resume>, JsonRejection>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let Json(resume) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let stored = state
        .store
        .save(resume)
        .await
        .map_err(|e| AppError::from_store("Failed to save resume", e))?;

    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id: stored.resume_id,
        timestamp: stored.timestamp,
    }))
}

/// GET /resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<StoredResume>, AppError> {
    let stored = state
        .store
        .get(&resume_id)
        .await
        .map_err(|e| AppError::from_store("Failed to fetch resume", e))?;
    Ok(Json(stored))
}

/// GET /resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ResumeListResponse> {
    let resumes = state.store.list().await;
    Json(ResumeListResponse {
        count: resumes.len(),
        resumes,
    })
}

/// DELETE /resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<DeleteResumeResponse>, AppError> {
    state
        .store
        .delete(&resume_id)
        .await
        .map_err(|e| AppError::from_store("Failed to delete resume", e))?;

    Ok(Json(DeleteResumeResponse {
        message: "Resume deleted successfully".to_string(),
        resume_id,
    }))
}
