use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
    #[error("rate limited by upstream")]
    RateLimited,
}

/// Boundary to any text-generation backend. The core depends only on
/// `generate` and treats every failure subtype the same way downstream.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// Chat-completions client for an OpenAI-style API.
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = CompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage { role: "user", content: prompt }],
            max_tokens: 900,
        };

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited);
        }
        if !resp.status().is_success() {
            return Err(GatewayError::Unavailable(format!(
                "upstream returned {}",
                resp.status()
            )));
        }

        let completion: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GatewayError::Unavailable("empty choices in completion".to_string()))
    }
}

/// Offline stand-in used when no real provider is configured: echoes the
/// start of the prompt in a canned response.
pub struct SimulatedGateway;

#[async_trait]
impl LlmGateway for SimulatedGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let head: String = prompt.chars().take(400).collect();
        Ok(format!("LLM simulation response for prompt:\n\n{head}..."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_gateway_echoes_prompt_head() {
        let reply = SimulatedGateway.generate("hello planner").await.unwrap();
        assert!(reply.starts_with("LLM simulation response for prompt:"));
        assert!(reply.contains("hello planner"));
    }

    #[tokio::test]
    async fn simulated_gateway_truncates_long_prompts() {
        let long = "x".repeat(1000);
        let reply = SimulatedGateway.generate(&long).await.unwrap();
        assert!(!reply.contains(&"x".repeat(401)));
        assert!(reply.ends_with("..."));
    }
}
