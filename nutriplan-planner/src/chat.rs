use nutriplan_model::ChatReply;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("No message provided")]
    MissingMessage,
    #[error("Empty message")]
    EmptyMessage,
}

/// Echoes the trimmed message back. There is no language understanding here.
pub fn reply(message: &str) -> Result<ChatReply, ChatError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    Ok(ChatReply {
        response: format!("I understand you're asking about: {}", message),
        sentiment: "neutral".to_owned(),
    })
}

/// Reads the `message` string out of a decoded request body.
pub fn reply_to_request(input: &Value) -> Result<ChatReply, ChatError> {
    input
        .get("message")
        .and_then(Value::as_str)
        .ok_or(ChatError::MissingMessage)
        .and_then(reply)
}
