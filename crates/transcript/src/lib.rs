pub mod format;
pub mod ingest;
pub mod log;
pub mod registry;

pub use format::to_text;
pub use ingest::{IngestHandle, Utterance, spawn_ingest};
pub use log::TranscriptLog;
pub use registry::SessionRegistry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recognized speech utterance, immutable once created.
///
/// The timestamp is stamped at construction, immediately before the entry is
/// appended; entries are never mutated afterwards, so readers can share
/// copies without further synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: String,
    pub text: String,
    /// BCP-47-like tag, e.g. "en-US" or "ms-MY".
    pub language: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(
        speaker: impl Into<String>,
        text: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            language: language.into(),
            timestamp: Utc::now(),
        }
    }
}
