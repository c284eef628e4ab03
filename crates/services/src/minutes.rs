use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use meetscribe_model::{ActionItem, MeetingMinutes, MeetingSession};
use meetscribe_transcript::{TranscriptEntry, to_text};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::completion::{CompletionError, CompletionService};

#[derive(Debug, Error)]
pub enum MinutesError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error("model returned invalid minutes JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

const MINUTES_SYSTEM_PROMPT: &str = concat!(
    "You generate structured meeting minutes from a transcript.\n",
    "Output a single JSON object matching this schema exactly:\n",
    "{\n",
    "  \"title\": \"<descriptive meeting title>\",\n",
    "  \"attendees\": [\"<name>\", ...],\n",
    "  \"summary\": \"<2-4 paragraph executive summary in formal English>\",\n",
    "  \"key_decisions\": [\"<decision 1>\", ...],\n",
    "  \"action_items\": [\n",
    "    {\n",
    "      \"title\": \"<short task title>\",\n",
    "      \"description\": \"<what needs to be done>\",\n",
    "      \"assignee\": \"<full name, exactly as mentioned in the transcript>\",\n",
    "      \"due_date\": \"<YYYY-MM-DD or null>\"\n",
    "    }\n",
    "  ]\n",
    "}\n",
    "Rules:\n",
    "- Output ONLY the JSON object, no markdown fences, no extra text.\n",
    "- Infer the meeting title from the discussion topics.\n",
    "- Extract every commitment, task, or follow-up mentioned, even casual ones.\n",
    "- If a due date is not stated, set due_date to null.\n",
    "- Minutes must be in formal English regardless of the spoken language."
);

/// Meeting-end pipeline: transcript snapshot in, structured minutes out.
pub struct MinutesService {
    completion: Arc<CompletionService>,
}

impl MinutesService {
    pub fn new(completion: Arc<CompletionService>) -> Self {
        Self { completion }
    }

    /// Generates minutes from a transcript snapshot.
    ///
    /// The snapshot is an independent copy, so the LLM round-trip happens
    /// with no reference into the live log. An empty transcript yields
    /// fallback minutes without calling the model.
    pub async fn generate(
        &self,
        session: &MeetingSession,
        entries: &[TranscriptEntry],
    ) -> Result<MeetingMinutes, MinutesError> {
        if entries.is_empty() {
            warn!(meeting_id = %session.id, "no transcript entries to summarise");
            return Ok(MeetingMinutes::empty(
                session.id,
                session.title.clone(),
                session.participants.clone(),
            ));
        }

        let transcript = to_text(entries);
        let participants = if session.participants.is_empty() {
            "Unknown".to_string()
        } else {
            session.participants.join(", ")
        };

        let user = format!(
            "Meeting participants: {participants}\n\n\
             --- TRANSCRIPT ---\n{transcript}\n--- END TRANSCRIPT ---\n\n\
             Generate the meeting minutes JSON now."
        );

        let raw = self.completion.complete(MINUTES_SYSTEM_PROMPT, &user).await?;
        let minutes = parse_minutes(session, &raw)?;

        info!(
            meeting_id = %session.id,
            action_items = minutes.action_items.len(),
            decisions = minutes.key_decisions.len(),
            "minutes generated"
        );
        Ok(minutes)
    }
}

#[derive(Debug, Deserialize)]
struct MinutesPayload {
    title: Option<String>,
    #[serde(default)]
    attendees: Vec<String>,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    key_decisions: Vec<String>,
    #[serde(default)]
    action_items: Vec<ActionItemPayload>,
}

#[derive(Debug, Deserialize)]
struct ActionItemPayload {
    title: String,
    #[serde(default)]
    description: String,
    assignee: String,
    due_date: Option<NaiveDate>,
}

fn parse_minutes(session: &MeetingSession, raw: &str) -> Result<MeetingMinutes, MinutesError> {
    let payload: MinutesPayload = serde_json::from_str(raw.trim())?;

    let action_items = payload
        .action_items
        .into_iter()
        .map(|a| ActionItem {
            title: a.title,
            description: a.description,
            assignee: a.assignee,
            due_date: a.due_date,
            completed: false,
        })
        .collect();

    let attendees = if payload.attendees.is_empty() {
        session.participants.clone()
    } else {
        payload.attendees
    };

    Ok(MeetingMinutes {
        meeting_id: session.id,
        title: payload.title.unwrap_or_else(|| session.title.clone()),
        date: Utc::now().date_naive(),
        attendees,
        summary: payload.summary,
        key_decisions: payload.key_decisions,
        action_items,
        created_at: Utc::now(),
    })
}
