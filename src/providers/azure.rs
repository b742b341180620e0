use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::model::Message;
use crate::params::GenerationParams;
use crate::providers::http_errors::{completion_request_error, completion_status_error};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    // The service may return null content for filtered completions.
    content: Option<String>,
}

/// Handle to one Azure OpenAI chat-completions deployment. Construction is
/// pure; a bad endpoint only surfaces on the first request.
#[derive(Clone)]
pub struct AzureClient {
    http: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
}

impl AzureClient {
    pub fn new(http: Client, cfg: &Config) -> Self {
        Self {
            http,
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key.clone(),
            deployment: cfg.deployment.clone(),
            api_version: cfg.api_version.clone(),
        }
    }

    pub async fn chat(&self, messages: &[Message], params: &GenerationParams) -> Result<String> {
        let api_url = chat_url(&self.endpoint, &self.deployment);
        let body = ChatCompletionRequest {
            messages: to_wire_messages(messages),
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
        };
        debug!(
            api_url = %api_url,
            deployment = %self.deployment,
            message_count = messages.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&api_url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                warn!(
                    api_url = %api_url,
                    deployment = %self.deployment,
                    error = %err,
                    "chat completion request failed"
                );
                completion_request_error(err, &api_url)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let response_body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string());
            warn!(
                api_url = %api_url,
                deployment = %self.deployment,
                status = %status,
                response_body_len = response_body.len(),
                "chat completion returned non-success status"
            );
            return Err(completion_status_error(status, &response_body));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        debug!(response_len = content.len(), "received chat completion response");
        Ok(content)
    }
}

fn chat_url(endpoint: &str, deployment: &str) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions",
        endpoint.trim_end_matches('/'),
        deployment
    )
}

fn to_wire_messages(messages: &[Message]) -> Vec<ChatMessage> {
    messages
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::chat_url;

    #[test]
    fn chat_url_handles_normalized_endpoint() {
        assert_eq!(
            chat_url("https://example.openai.azure.com/", "gpt-4o-mini"),
            "https://example.openai.azure.com/openai/deployments/gpt-4o-mini/chat/completions"
        );
    }

    #[test]
    fn chat_url_tolerates_missing_trailing_slash() {
        assert_eq!(
            chat_url("https://example.openai.azure.com", "gpt-4o-mini"),
            "https://example.openai.azure.com/openai/deployments/gpt-4o-mini/chat/completions"
        );
    }
}
