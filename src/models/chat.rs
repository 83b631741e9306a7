use chrono::NaiveDateTime;
use serde::{ Serialize, Deserialize, Deserializer };
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat message as returned by the messages API. Only `role` and
/// `content` take part in rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error> where D: Deserializer<'de> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            content: content.into(),
            created_at: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record() {
        let json = r#"{"id": 7, "role": "assistant", "content": "hi", "created_at": "2024-03-01T12:30:45.123456"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, Some(7));
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "hi");
        assert!(message.created_at.is_some());
    }

    #[test]
    fn decodes_minimal_record() {
        let message: ChatMessage = serde_json::from_str(r#"{"role": "user"}"#).unwrap();
        assert_eq!(message, ChatMessage::new(Role::User, ""));
    }

    #[test]
    fn null_content_decodes_as_empty() {
        let message: ChatMessage = serde_json::from_str(r#"{"role": "user", "content": null}"#).unwrap();
        assert_eq!(message.content, "");
    }

    #[test]
    fn rejects_unknown_role() {
        let result = serde_json::from_str::<ChatMessage>(r#"{"role": "system", "content": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_without_empty_metadata() {
        let json = serde_json::to_value(ChatMessage::new(Role::User, "hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "content": "hello" }));
    }
}
