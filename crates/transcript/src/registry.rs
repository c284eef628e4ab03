use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::ingest::{IngestHandle, spawn_ingest};
use crate::log::TranscriptLog;

/// Routes live transcript logs to request handlers by meeting id.
///
/// One registry is owned by the serving process and passed into handlers via
/// application state. A session is registered at meeting start and removed at
/// meeting end; sessions are fully independent — no state is shared between
/// logs beyond the map itself.
pub struct SessionRegistry {
    sessions: DashMap<Uuid, Session>,
    default_language: String,
    ingest_capacity: usize,
}

struct Session {
    log: Arc<TranscriptLog>,
    ingest: IngestHandle,
    ingest_abort: tokio::task::AbortHandle,
}

impl SessionRegistry {
    pub fn new(default_language: String, ingest_capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            default_language,
            ingest_capacity,
        }
    }

    /// Registers a log for a meeting and spawns its ingest consumer.
    ///
    /// Idempotent: opening an already-open meeting returns the existing log
    /// untouched.
    pub fn open(&self, meeting_id: Uuid) -> Arc<TranscriptLog> {
        let session = self.sessions.entry(meeting_id).or_insert_with(|| {
            let log = Arc::new(TranscriptLog::new());
            let (ingest, task) = spawn_ingest(
                log.clone(),
                self.default_language.clone(),
                self.ingest_capacity,
            );
            info!(%meeting_id, "transcript session opened");
            Session {
                log,
                ingest,
                ingest_abort: task.abort_handle(),
            }
        });
        session.log.clone()
    }

    /// Returns the live log for an active meeting, if any.
    pub fn log(&self, meeting_id: &Uuid) -> Option<Arc<TranscriptLog>> {
        self.sessions.get(meeting_id).map(|s| s.log.clone())
    }

    /// Returns the recognizer-side ingest handle for an active meeting.
    pub fn ingest(&self, meeting_id: &Uuid) -> Option<IngestHandle> {
        self.sessions.get(meeting_id).map(|s| s.ingest.clone())
    }

    /// Removes a session and stops its ingest consumer.
    ///
    /// The log itself stays alive for any reader still holding an `Arc` to
    /// it; the registry just stops routing to it.
    pub fn close(&self, meeting_id: &Uuid) -> bool {
        if let Some((_, session)) = self.sessions.remove(meeting_id) {
            session.ingest_abort.abort();
            debug!(%meeting_id, "transcript session closed");
            true
        } else {
            false
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
