use crate::models::chat::ChatMessage;
use crate::models::fragment::Fragment;
use crate::render::{ escape_html, render };

pub const EMPTY_CONVERSATION: &str = concat!(
    "<div class=\"text-center my-5\">",
    "<h4>Start a new conversation</h4>",
    "<p class=\"text-muted\">Send a message to begin chatting with the AI assistant</p>",
    "</div>"
);

pub fn render_message(message: &ChatMessage) -> Fragment {
    Fragment::from_html(
        format!(
            "<div class=\"message message-{}\">{}</div>",
            message.role,
            render(&message.content)
        )
    )
}

pub fn render_conversation(messages: &[ChatMessage]) -> Fragment {
    if messages.is_empty() {
        return Fragment::from_html(EMPTY_CONVERSATION.to_string());
    }
    let html = messages
        .iter()
        .map(|message| render_message(message).into_string())
        .collect::<String>();
    Fragment::from_html(html)
}

/// Wraps a rendered conversation in a standalone HTML document.
pub fn render_page(title: &str, messages: &[ChatMessage]) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<div class=\"chat-messages\">{}</div>\n</body>\n</html>\n",
        escape_html(title),
        render_conversation(messages)
    )
}
