use crate::TranscriptEntry;

/// Renders entries as readable transcript text, one line per entry:
/// `[HH:MM:SS] Speaker: text`.
///
/// Pure function of its input — it never reads the live log, so formatting a
/// snapshot stays frozen even while the recognizer keeps appending.
pub fn to_text(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "[{}] {}: {}",
                e.timestamp.format("%H:%M:%S"),
                e.speaker,
                e.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
