//! Local request handler for layout generation.
//!
//! Mirrors an HTTP route: takes `{ "prompt": ... }` and answers with a status
//! code plus either `{ "layouts": [...] }` or `{ "error": ... }`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::client::{CompletionClient, GitHubModelsClient};
use super::extract::{extract_descriptors, heuristic_descriptors};
use super::{GenerateRequest, LayoutDescriptor, RemoteError};
use crate::config::RemoteConfig;

/// Reply body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateReply {
    Layouts { layouts: Vec<LayoutDescriptor> },
    Error { error: String },
}

/// Status code plus reply body.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: GenerateReply,
}

impl HandlerResponse {
    fn ok(layouts: Vec<LayoutDescriptor>) -> Self {
        Self {
            status: 200,
            body: GenerateReply::Layouts { layouts },
        }
    }

    fn internal_error(error: impl ToString) -> Self {
        Self {
            status: 500,
            body: GenerateReply::Error {
                error: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Descriptors from a successful reply; `None` for error replies.
    pub fn into_layouts(self) -> Option<Vec<LayoutDescriptor>> {
        match self.body {
            GenerateReply::Layouts { layouts } => Some(layouts),
            GenerateReply::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            GenerateReply::Error { error } => Some(error),
            GenerateReply::Layouts { .. } => None,
        }
    }

    /// Serialized reply body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

/// Handles generation requests against an optional completion client.
#[derive(Clone)]
pub struct GenerateHandler {
    client: Option<Arc<dyn CompletionClient>>,
    credential_var: String,
}

impl GenerateHandler {
    /// Handler backed by the configured chat-completion API.
    ///
    /// Without a credential the handler still answers, always with a `500`.
    pub fn from_config(config: &RemoteConfig) -> Self {
        let client = match GitHubModelsClient::new(config) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn CompletionClient>),
            Err(e) => {
                warn!("Remote generation disabled: {}", e);
                None
            }
        };
        Self {
            client,
            credential_var: config.credential_var.clone(),
        }
    }

    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
            credential_var: crate::config::DEFAULT_CREDENTIAL_VAR.to_string(),
        }
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    pub async fn handle(&self, request: &GenerateRequest) -> HandlerResponse {
        let Some(client) = &self.client else {
            return HandlerResponse::internal_error(RemoteError::MissingCredential {
                var: self.credential_var.clone(),
            });
        };

        let completion = match client.complete(&request.prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion failed: {}", e);
                return HandlerResponse::internal_error(e);
            }
        };

        match extract_descriptors(&completion) {
            Ok(layouts) => {
                debug!(count = layouts.len(), "Parsed remote layouts");
                HandlerResponse::ok(layouts)
            }
            Err(e) => {
                warn!("{}; substituting heuristic layouts", e);
                HandlerResponse::ok(heuristic_descriptors(&request.prompt))
            }
        }
    }

    /// Handle a raw JSON request body.
    pub async fn handle_json(&self, body: &str) -> HandlerResponse {
        match serde_json::from_str::<GenerateRequest>(body) {
            Ok(request) => self.handle(&request).await,
            Err(e) => HandlerResponse::internal_error(e),
        }
    }
}
