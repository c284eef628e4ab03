use std::sync::Arc;

use meetscribe_model::{ConversationHistory, ConversationTurn, TurnRole};
use meetscribe_transcript::{TranscriptEntry, to_text};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::completion::{CompletionError, CompletionService};
use crate::retrieval::{Passage, RetrievalService};
use crate::storage::{CONTAINER_HISTORY, DocumentStore, StoreError, get_as, upsert_as};

#[derive(Debug, Error)]
pub enum QaError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

const QA_SYSTEM_PROMPT: &str = concat!(
    "You are a meeting assistant answering questions during a live meeting.\n",
    "Ground every answer in the provided live transcript and retrieved\n",
    "passages. Cite passage sources inline as (Source: <name>). If the\n",
    "answer is not in any provided source, say so honestly. Keep responses\n",
    "concise; use bullet points for lists. Respond in the same language the\n",
    "user used."
);

/// Grounded Q&A over the live transcript window, retrieved passages, and
/// prior conversation turns.
pub struct QaService {
    completion: Arc<CompletionService>,
    retrieval: Arc<RetrievalService>,
    store: Arc<dyn DocumentStore>,
    history_limit: usize,
}

impl QaService {
    pub fn new(
        completion: Arc<CompletionService>,
        retrieval: Arc<RetrievalService>,
        store: Arc<dyn DocumentStore>,
        history_limit: usize,
    ) -> Self {
        Self {
            completion,
            retrieval,
            store,
            history_limit,
        }
    }

    /// Answers a question in the context of a meeting.
    ///
    /// `context` is a bounded recent window of the live log (already copied
    /// out — no lock is held across the completion round-trip). Retrieval
    /// failures degrade to an answer grounded in the transcript alone.
    pub async fn answer(
        &self,
        question: &str,
        meeting_id: Uuid,
        conversation_id: &str,
        context: &[TranscriptEntry],
    ) -> Result<String, QaError> {
        let passages = match self.retrieval.search(question, Some(meeting_id)).await {
            Ok(passages) => passages,
            Err(e) => {
                warn!(%meeting_id, "retrieval failed, answering without passages: {}", e);
                Vec::new()
            }
        };

        let mut history: ConversationHistory =
            get_as(self.store.as_ref(), CONTAINER_HISTORY, conversation_id)
                .await?
                .unwrap_or_default();

        let transcript = (!context.is_empty()).then(|| to_text(context));
        let user = build_user_content(question, transcript.as_deref(), &passages, &history.turns);

        let answer = self.completion.complete(QA_SYSTEM_PROMPT, &user).await?;

        history.turns.push(ConversationTurn::user(question));
        history.turns.push(ConversationTurn::assistant(&answer));
        truncate_history(&mut history, self.history_limit);
        upsert_as(self.store.as_ref(), CONTAINER_HISTORY, conversation_id, &history).await?;

        info!(
            %meeting_id,
            conversation_id,
            context_entries = context.len(),
            passages = passages.len(),
            "question answered"
        );
        Ok(answer)
    }
}

/// Keeps only the most recent `limit` turns.
fn truncate_history(history: &mut ConversationHistory, limit: usize) {
    let len = history.turns.len();
    if len > limit {
        history.turns.drain(..len - limit);
    }
}

fn build_user_content(
    question: &str,
    transcript: Option<&str>,
    passages: &[Passage],
    history: &[ConversationTurn],
) -> String {
    let mut sections = Vec::new();

    if let Some(transcript) = transcript {
        sections.push(format!("--- LIVE TRANSCRIPT ---\n{transcript}"));
    }

    if !passages.is_empty() {
        let lines: Vec<String> = passages
            .iter()
            .map(|p| format!("[{}] {}", p.source, p.content))
            .collect();
        sections.push(format!("--- RETRIEVED PASSAGES ---\n{}", lines.join("\n")));
    }

    if !history.is_empty() {
        let lines: Vec<String> = history
            .iter()
            .map(|t| {
                let role = match t.role {
                    TurnRole::User => "user",
                    TurnRole::Assistant => "assistant",
                };
                format!("{role}: {}", t.content)
            })
            .collect();
        sections.push(format!("--- CONVERSATION SO FAR ---\n{}", lines.join("\n")));
    }

    sections.push(format!("Question: {question}"));
    sections.join("\n\n")
}
