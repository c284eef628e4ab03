use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::{error::ApiError, routes::meeting::parse_meeting_id, state::AppState};

#[derive(Debug, Deserialize)]
pub struct QaRequest {
    pub question: String,
    pub conversation_id: Option<String>,
}

/// Answers a question in the context of a meeting.
///
/// The transcript context is a bounded recent window (`last_n`), not the
/// full log — prompt size must not grow with meeting length. A meeting
/// without a live log (already ended) still gets an answer from retrieval
/// and conversation history alone.
pub async fn ask(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
    Json(body): Json<QaRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_meeting_id(&meeting_id)?;
    if body.question.trim().is_empty() {
        return Err(ApiError::Validation("question must not be empty".to_string()));
    }

    let conversation_id = body.conversation_id.unwrap_or_else(|| id.to_string());
    let context = state
        .sessions
        .log(&id)
        .map(|log| log.last_n(state.settings.qa.transcript_context_limit))
        .unwrap_or_default();

    let answer = state
        .qa
        .answer(&body.question, id, &conversation_id, &context)
        .await?;

    Ok(Json(serde_json::json!({
        "answer": answer,
        "conversation_id": conversation_id,
    })))
}
