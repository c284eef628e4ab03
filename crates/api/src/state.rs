use std::sync::Arc;

use meetscribe_config::Settings;
use meetscribe_services::{
    CompletionService, DocumentStore, MemoryStore, MinutesService, QaService, RetrievalService,
};
use meetscribe_transcript::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<dyn DocumentStore>,
    pub sessions: Arc<SessionRegistry>,
    pub minutes: Arc<MinutesService>,
    pub qa: Arc<QaService>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let sessions = Arc::new(SessionRegistry::new(
            settings.transcript.primary_language.clone(),
            settings.transcript.ingest_queue_capacity,
        ));

        let completion = Arc::new(CompletionService::new(
            settings.completion.api_key.clone(),
            settings.completion.model.clone(),
            settings.completion.max_tokens,
        ));
        let retrieval = Arc::new(RetrievalService::new(settings.retrieval.clone()));

        let minutes = Arc::new(MinutesService::new(completion.clone()));
        let qa = Arc::new(QaService::new(
            completion,
            retrieval,
            store.clone(),
            settings.qa.history_limit,
        ));

        Self {
            settings,
            store,
            sessions,
            minutes,
            qa,
        }
    }
}
