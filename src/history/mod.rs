mod backend;
mod file;

pub use backend::BackendHistorySource;
pub use file::FileHistorySource;

use async_trait::async_trait;
use log::info;
use std::error::Error;
use std::sync::Arc;
use thiserror::Error;
use crate::cli::Args;
use crate::models::chat::Conversation;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("invalid conversation id '{0}'")]
    InvalidId(String),
    #[error("conversation '{0}' not found")]
    NotFound(String),
    #[error("backend answered {status} for conversation '{conversation_id}'")]
    Status {
        conversation_id: String,
        status: u16,
    },
    #[error("request to backend failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not decode messages: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("history file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
}

#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Returns the messages of a conversation, oldest first.
    async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation, HistoryError>;
}

/// Conversation ids end up in URLs and file names, so only a conservative
/// character set is accepted.
pub fn validate_conversation_id(conversation_id: &str) -> Result<(), HistoryError> {
    let valid =
        !conversation_id.is_empty() &&
        conversation_id.len() <= 64 &&
        conversation_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(HistoryError::InvalidId(conversation_id.to_string()))
    }
}

pub fn create_history_source(
    args: &Args
) -> Result<Arc<dyn HistorySource>, Box<dyn Error + Send + Sync>> {
    match args.history_type.to_lowercase().as_str() {
        "backend" => {
            let source = BackendHistorySource::new(args)?;
            Ok(Arc::new(source))
        }
        "file" => Ok(Arc::new(FileHistorySource::new(&args.history_dir))),
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported history source type: {}", args.history_type)
                    )
                )
            ),
    }
}

pub fn initialize_history_source(
    args: &Args
) -> Result<Arc<dyn HistorySource>, Box<dyn Error + Send + Sync>> {
    match args.history_type.to_lowercase().as_str() {
        "file" => info!("Conversations will be read from directory: {}", args.history_dir),
        _ => info!("Conversations will be fetched from: {}", args.backend_url),
    }
    create_history_source(args)
}
