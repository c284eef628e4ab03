use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use meetscribe_model::{MeetingMinutes, MeetingSession, SessionStatus};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};
use meetscribe_services::storage::{
    CONTAINER_MINUTES, CONTAINER_SESSIONS, get_as, upsert_as,
};

#[derive(Debug, Deserialize)]
pub struct StartMeetingRequest {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

fn default_title() -> String {
    "Untitled Meeting".to_string()
}

#[derive(Debug, Serialize)]
pub struct StartMeetingResponse {
    pub meeting_id: String,
    pub status: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<StartMeetingRequest>,
) -> Result<(StatusCode, Json<StartMeetingResponse>), ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }

    let session = MeetingSession::new(body.title, body.participants);
    upsert_as(
        state.store.as_ref(),
        CONTAINER_SESSIONS,
        &session.id.to_string(),
        &session,
    )
    .await?;

    state.sessions.open(session.id);
    info!(meeting_id = %session.id, title = %session.title, "meeting session started");

    Ok((
        StatusCode::CREATED,
        Json(StartMeetingResponse {
            meeting_id: session.id.to_string(),
            status: "active".to_string(),
        }),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Json<MeetingSession>, ApiError> {
    let id = parse_meeting_id(&meeting_id)?;
    let session: MeetingSession =
        get_as(state.store.as_ref(), CONTAINER_SESSIONS, &id.to_string())
            .await?
            .ok_or_else(|| ApiError::NotFound("Meeting not found".to_string()))?;
    Ok(Json(session))
}

/// Ends a meeting: snapshot the transcript, generate minutes, persist them,
/// mark the session ended, and release the live log.
///
/// The transcript is read with `snapshot`, not drained — a still-running Q&A
/// request may be reading the same log concurrently.
pub async fn end(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Json<MeetingMinutes>, ApiError> {
    let id = parse_meeting_id(&meeting_id)?;
    let mut session: MeetingSession =
        get_as(state.store.as_ref(), CONTAINER_SESSIONS, &id.to_string())
            .await?
            .ok_or_else(|| ApiError::NotFound("Meeting not found".to_string()))?;

    let entries = state
        .sessions
        .log(&id)
        .map(|log| log.snapshot())
        .unwrap_or_default();

    let minutes = state.minutes.generate(&session, &entries).await?;
    upsert_as(
        state.store.as_ref(),
        CONTAINER_MINUTES,
        &id.to_string(),
        &minutes,
    )
    .await?;

    session.status = SessionStatus::Ended;
    session.ended_at = Some(Utc::now());
    upsert_as(
        state.store.as_ref(),
        CONTAINER_SESSIONS,
        &id.to_string(),
        &session,
    )
    .await?;

    state.sessions.close(&id);
    info!(meeting_id = %id, entries = entries.len(), "meeting ended, minutes generated");

    Ok(Json(minutes))
}

pub async fn minutes(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Json<MeetingMinutes>, ApiError> {
    let id = parse_meeting_id(&meeting_id)?;
    let minutes: MeetingMinutes =
        get_as(state.store.as_ref(), CONTAINER_MINUTES, &id.to_string())
            .await?
            .ok_or_else(|| ApiError::NotFound("Minutes not found".to_string()))?;
    Ok(Json(minutes))
}

pub fn parse_meeting_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid meeting_id".to_string()))
}
