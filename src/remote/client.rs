//! Chat-completion client for the text-generation service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::RemoteError;
use crate::config::RemoteConfig;

/// Produces a free-text completion for a layout prompt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Client for the GitHub Models chat-completion API.
pub struct GitHubModelsClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    credential: String,
    temperature: f32,
    max_tokens: u32,
    layouts_requested: usize,
}

impl GitHubModelsClient {
    /// Build a client; fails when the config carries no credential.
    pub fn new(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let credential =
            config
                .credential
                .clone()
                .ok_or_else(|| RemoteError::MissingCredential {
                    var: config.credential_var.clone(),
                })?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            credential,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            layouts_requested: config.layouts_requested,
        })
    }

    fn system_prompt(&self) -> String {
        format!(
            r##"You are a UI/UX designer. Create {n} different HTML landing page layouts based on the user's prompt.
Return ONLY a JSON array with {n} objects. Each object must have:
- title: A catchy title for the layout
- description: Detailed description of the design
- html: Complete HTML code for the layout (inline styles only)
- color: A CSS background color for the layout card

Example format:
[
  {{
    "title": "Modern SaaS Hero",
    "description": "Clean hero section with gradient background",
    "html": "<div style='padding:32px;background:#4f46e5'><h1 style='color:#fff'>Welcome</h1></div>",
    "color": "#eef2ff"
  }}
]"##,
            n = self.layouts_requested
        )
    }

    fn request_body(&self, prompt: &str) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.system_prompt(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Create {} landing page layouts for: {}",
                        self.layouts_requested, prompt
                    ),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for GitHubModelsClient {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        debug!(endpoint = %self.endpoint, model = %self.model, "Requesting layout completion");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.credential)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Completion request failed: {} - {}", status, body);
            return Err(RemoteError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(RemoteError::EmptyCompletion)
    }
}
