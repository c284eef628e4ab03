use parking_lot::Mutex;

use crate::TranscriptEntry;

/// Thread-safe, append-only log of recognized utterances for one meeting.
///
/// Entries are appended as they arrive from the recognizer stream; any number
/// of request handlers read concurrently. Every read returns an independent
/// copy so that formatting and LLM calls never hold a reference into the live
/// backing storage — a slow network call downstream must not stall the
/// recognizer's append path, and a returned snapshot must never change under
/// its consumer.
///
/// `snapshot` reads without clearing; `snapshot_and_clear` atomically drains
/// the whole log (an entry racing with the drain lands either in the returned
/// copy or in the log, never nowhere); `last_n` bounds the recent window fed
/// to downstream prompts.
#[derive(Default)]
pub struct TranscriptLog {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Appends an entry as the new last element.
    ///
    /// Concurrent appends serialize into a total order; that insertion order
    /// is the only order reads observe. The log does not validate content —
    /// filtering empty text is the producer's job.
    pub fn append(&self, entry: TranscriptEntry) {
        self.entries.lock().push(entry);
    }

    /// Returns a copy of all entries in insertion order, without clearing.
    pub fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().clone()
    }

    /// Atomically returns all entries and empties the log.
    pub fn snapshot_and_clear(&self) -> Vec<TranscriptEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Discards all entries without returning them.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Returns up to the last `n` entries in insertion order.
    ///
    /// Fewer are returned if the log is shorter than `n`; `n == 0` yields an
    /// empty vec.
    pub fn last_n(&self, n: usize) -> Vec<TranscriptEntry> {
        let entries = self.entries.lock();
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
