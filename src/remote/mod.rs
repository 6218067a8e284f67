//! Optional text-generation collaborator.
//!
//! The collaborator forwards a prompt to a chat-completion API and turns the
//! free-text answer into layout descriptors. Every failure is absorbed here:
//! a missing credential or an upstream error becomes a `500` reply the caller
//! answers with local composition, and an unparsable completion becomes a
//! deterministic heuristic set.
//!
//! - [`CompletionClient`] is the seam for the upstream API
//! - [`GenerateHandler`] is the local request handler
//! - [`extract_descriptors`] and [`heuristic_descriptors`] scan and substitute

mod client;
mod extract;
mod handler;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::{CompletionClient, GitHubModelsClient};
pub use extract::{extract_descriptors, heuristic_descriptors};
pub use handler::{GenerateHandler, GenerateReply, HandlerResponse};

/// Errors from the text-generation collaborator.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Missing credential: set {var}")]
    MissingCredential { var: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream returned no completion")]
    EmptyCompletion,

    #[error("No layout array in completion: {0}")]
    UpstreamParse(String),
}

/// Body of a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// A candidate layout proposed by the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Markup fragment
    #[serde(default)]
    pub html: String,
    /// Background color hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
