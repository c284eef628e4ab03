use axum::{
    Json,
    extract::{Path, State},
};
use meetscribe_transcript::TranscriptEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ApiError, routes::meeting::parse_meeting_id, state::AppState};

#[derive(Debug, Deserialize)]
pub struct TranscriptLineRequest {
    pub speaker: String,
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub entries: Vec<TranscriptEntry>,
}

/// Batch ingestion for non-live sources (replay, testing). Appends one entry
/// per line, in the order received.
pub async fn ingest(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
    Json(lines): Json<Vec<TranscriptLineRequest>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_meeting_id(&meeting_id)?;
    let log = state
        .sessions
        .log(&id)
        .ok_or_else(|| ApiError::NotFound("No active meeting buffer".to_string()))?;

    // Validate the whole batch before appending anything.
    if lines.iter().any(|l| l.text.trim().is_empty()) {
        return Err(ApiError::Validation(
            "transcript text must not be empty".to_string(),
        ));
    }

    let buffered = lines.len();
    for line in lines {
        let language = line
            .language
            .unwrap_or_else(|| state.settings.transcript.primary_language.clone());
        log.append(TranscriptEntry::new(line.speaker, line.text, language));
    }

    debug!(meeting_id = %id, buffered, total = log.len(), "transcript lines buffered");
    Ok(Json(serde_json::json!({
        "buffered": buffered,
        "total": log.len(),
    })))
}

/// Returns the current transcript for the active meeting.
pub async fn read(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let id = parse_meeting_id(&meeting_id)?;
    let log = state
        .sessions
        .log(&id)
        .ok_or_else(|| ApiError::NotFound("No active meeting buffer".to_string()))?;

    Ok(Json(TranscriptResponse {
        entries: log.snapshot(),
    }))
}
