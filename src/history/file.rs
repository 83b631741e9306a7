use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;
use crate::history::{ validate_conversation_id, HistoryError, HistorySource };
use crate::models::chat::{ ChatMessage, Conversation };

/// Reads conversations exported as `<dir>/<id>.json`, each holding the same
/// JSON array the messages API returns.
#[derive(Debug, Clone)]
pub struct FileHistorySource {
    dir: PathBuf,
}

impl FileHistorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl HistorySource for FileHistorySource {
    async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation, HistoryError> {
        validate_conversation_id(conversation_id)?;
        let path = self.dir.join(format!("{}.json", conversation_id));
        debug!("Reading conversation from {}", path.display());

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(HistoryError::NotFound(conversation_id.to_string()));
            }
            Err(e) => {
                return Err(e.into());
            }
        };
        let messages: Vec<ChatMessage> = serde_json::from_str(&content)?;

        Ok(Conversation {
            id: conversation_id.to_string(),
            messages,
        })
    }
}
