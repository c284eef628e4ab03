use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub transcript: TranscriptSettings,
    pub completion: CompletionSettings,
    pub retrieval: RetrievalSettings,
    pub qa: QaSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TranscriptSettings {
    /// Language tag stamped onto entries when the recognizer reports none.
    pub primary_language: String,
    /// Capacity of the recognizer-to-log utterance channel.
    pub ingest_queue_capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompletionSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub top_k: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QaSettings {
    /// Max transcript entries included as Q&A context.
    pub transcript_context_limit: usize,
    /// Max prior conversation turns included per answer.
    pub history_limit: usize,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("MEETSCRIBE"),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("transcript.primary_language", "en-US")?
            .set_default("transcript.ingest_queue_capacity", 512)?
            .set_default("completion.api_key", None::<String>)?
            .set_default("completion.model", "claude-sonnet-4-5-20250929")?
            .set_default("completion.max_tokens", 4096)?
            .set_default("retrieval.endpoint", None::<String>)?
            .set_default("retrieval.api_key", None::<String>)?
            .set_default("retrieval.top_k", 5)?
            .set_default("qa.transcript_context_limit", 50)?
            .set_default("qa.history_limit", 10)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load().expect("Failed to load default settings")
    }
}
