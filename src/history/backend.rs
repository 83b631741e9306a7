use async_trait::async_trait;
use log::{ debug, warn };
use reqwest::header::COOKIE;
use reqwest::{ Client as HttpClient, StatusCode };
use std::error::Error;
use std::time::Duration;
use url::Url;
use crate::cli::Args;
use crate::history::{ validate_conversation_id, HistoryError, HistorySource };
use crate::models::chat::{ ChatMessage, Conversation };

/// Reads conversations from the chat backend's messages API.
#[derive(Debug, Clone)]
pub struct BackendHistorySource {
    http: HttpClient,
    base_url: Url,
    session: Option<String>,
}

impl BackendHistorySource {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(args.request_timeout_secs))
            .build()?;
        let base_url = parse_base_url(&args.backend_url).map_err(|e|
            format!("Invalid backend url '{}': {}", args.backend_url, e)
        )?;
        let session = args.backend_session.clone().filter(|s| !s.trim().is_empty());

        Ok(Self { http, base_url, session })
    }

    fn messages_url(&self, conversation_id: &str) -> Result<Url, HistoryError> {
        Ok(self.base_url.join(&format!("api/conversations/{}/messages", conversation_id))?)
    }
}

// `Url::join` drops the last path segment unless the base ends with '/'.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl HistorySource for BackendHistorySource {
    async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation, HistoryError> {
        validate_conversation_id(conversation_id)?;
        let url = self.messages_url(conversation_id)?;
        debug!("Fetching messages from {}", url);

        let mut request = self.http.get(url);
        if let Some(session) = &self.session {
            request = request.header(COOKIE, format!("session={}", session));
        }
        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HistoryError::NotFound(conversation_id.to_string()));
        }
        if !status.is_success() {
            warn!("Backend answered {} for conversation {}", status, conversation_id);
            return Err(HistoryError::Status {
                conversation_id: conversation_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let messages: Vec<ChatMessage> = serde_json::from_str(&body)?;
        debug!("Conversation {} has {} messages", conversation_id, messages.len());

        Ok(Conversation {
            id: conversation_id.to_string(),
            messages,
        })
    }
}
