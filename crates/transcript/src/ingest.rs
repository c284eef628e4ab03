use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{TranscriptEntry, TranscriptLog};

/// A recognized utterance as delivered by the recognizer, before it becomes
/// a log entry. The language is optional — the ingest loop fills in the
/// configured primary language when detection reported nothing.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
    pub language: Option<String>,
}

/// Producer-side handle for the recognizer-to-log channel.
///
/// Recognizer callbacks fire on whatever thread the speech SDK owns; `push`
/// is non-blocking and safe to call from there. A single consumer task drains
/// the channel and performs the actual appends, so entries land in delivery
/// order without the callback thread ever touching the log's lock.
#[derive(Clone)]
pub struct IngestHandle {
    tx: mpsc::Sender<Utterance>,
}

impl IngestHandle {
    /// Enqueues an utterance without blocking. Returns `false` if the queue
    /// is full or the consumer has stopped; the utterance is dropped.
    pub fn push(&self, utterance: Utterance) -> bool {
        match self.tx.try_send(utterance) {
            Ok(()) => true,
            Err(e) => {
                warn!("utterance dropped: {}", e);
                false
            }
        }
    }

    /// Enqueues an utterance, waiting for queue space. For async producers
    /// such as the batch-ingestion path of a replay tool.
    pub async fn send(&self, utterance: Utterance) -> bool {
        self.tx.send(utterance).await.is_ok()
    }
}

/// Spawns the single consumer task that appends incoming utterances to `log`.
///
/// The task exits when every `IngestHandle` clone has been dropped; the
/// returned `JoinHandle` lets the owner abort it early at session end.
pub fn spawn_ingest(
    log: Arc<TranscriptLog>,
    default_language: String,
    capacity: usize,
) -> (IngestHandle, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(capacity);
    let task = tokio::spawn(ingest_loop(rx, log, default_language));
    (IngestHandle { tx }, task)
}

async fn ingest_loop(
    mut rx: mpsc::Receiver<Utterance>,
    log: Arc<TranscriptLog>,
    default_language: String,
) {
    while let Some(utterance) = rx.recv().await {
        let text = utterance.text.trim().to_string();
        if text.is_empty() {
            debug!(speaker = %utterance.speaker, "recognizer produced empty text, skipping");
            continue;
        }

        let language = utterance
            .language
            .unwrap_or_else(|| default_language.clone());
        log.append(TranscriptEntry::new(utterance.speaker, text, language));
    }

    debug!("utterance channel closed, ingest loop exiting");
}
