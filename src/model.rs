use anyhow::{Result, bail};
use tracing::debug;

use crate::params::GenerationParams;
use crate::providers::azure::AzureClient;

pub const SYSTEM_PROMPT: &str = "Eres un asistente útil y claro. Responde en español y de \
     forma concisa, y si falta información pide una aclaración.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// One system turn with the assistant persona, then the transcript in order.
/// The system turn is synthesized per request and never stored.
fn request_messages(transcript: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(transcript.len() + 1);
    messages.push(Message::system(SYSTEM_PROMPT));
    messages.extend_from_slice(transcript);
    messages
}

fn normalize_reply(raw: &str) -> Result<String> {
    let reply = raw.trim();
    if reply.is_empty() {
        bail!("the model returned an empty reply");
    }
    Ok(reply.to_string())
}

/// Issues exactly one completion call for the current transcript. Empty
/// replies are an error so the caller never appends an empty assistant turn.
pub async fn request_reply(
    client: &AzureClient,
    params: &GenerationParams,
    transcript: &[Message],
) -> Result<String> {
    let messages = request_messages(transcript);
    debug!(
        message_count = messages.len(),
        "dispatching chat completion request"
    );

    let raw = client.chat(&messages, params).await?;
    normalize_reply(&raw)
}

#[cfg(test)]
mod tests {
    use super::{Message, MessageRole, SYSTEM_PROMPT, normalize_reply, request_messages};

    #[test]
    fn request_messages_prepends_the_system_turn() {
        let transcript = vec![Message::user("Hola"), Message::assistant("Buenas")];
        let messages = request_messages(&transcript);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].content, "Hola");
        assert_eq!(messages[2].content, "Buenas");
    }

    #[test]
    fn request_messages_on_empty_transcript_is_system_only() {
        let messages = request_messages(&[]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::System);
    }

    #[test]
    fn normalize_reply_trims_surrounding_whitespace() {
        let reply = normalize_reply("  hola  \n").expect("reply should be accepted");
        assert_eq!(reply, "hola");
    }

    #[test]
    fn normalize_reply_rejects_blank_content() {
        let err = normalize_reply("   \n\t").expect_err("blank reply should fail");
        assert!(err.to_string().contains("empty reply"), "got: {err:#}");
    }
}
