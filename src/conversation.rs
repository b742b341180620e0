use anyhow::Result;

use crate::gateway::CompletionGateway;
use crate::model::Message;

/// Owns the session transcript: user and assistant turns only, in exchange
/// order, unbounded for the life of the process.
#[derive(Debug, Default)]
pub struct Conversation {
    transcript: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Runs one exchange. On success the transcript gains the user turn and
    /// the assistant turn, in that order. On failure only the user turn
    /// remains; the next request still carries it as context, even though no
    /// reply was ever recorded for it.
    pub async fn run_turn<G: CompletionGateway>(
        &mut self,
        gateway: &G,
        input: &str,
    ) -> Result<String> {
        self.transcript.push(Message::user(input.trim()));
        let reply = gateway.complete(&self.transcript).await?;
        self.transcript.push(Message::assistant(reply.clone()));
        Ok(reply)
    }
}
