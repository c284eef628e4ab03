use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A commitment extracted from the transcript, assigned to a participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// Structured minutes produced at meeting end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingMinutes {
    pub meeting_id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub summary: String,
    #[serde(default)]
    pub key_decisions: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    pub created_at: DateTime<Utc>,
}

impl MeetingMinutes {
    /// Minutes for a meeting where nothing was transcribed.
    pub fn empty(meeting_id: Uuid, title: String, attendees: Vec<String>) -> Self {
        Self {
            meeting_id,
            title,
            date: Utc::now().date_naive(),
            attendees,
            summary: "No transcript was recorded for this meeting.".to_string(),
            key_decisions: Vec::new(),
            action_items: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
