//! Message types for workspace-UI communication.

use serde::{Deserialize, Serialize};

/// Message levels for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// Which bounded list an entry was evicted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    ChatHistory,
    Projects,
}

/// The oldest entry of a full list was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvictionMessage {
    pub list: ListKind,
    /// Prompt or project name of the evicted entry
    pub label: String,
}

/// Where the content of an applied batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchSource {
    /// Local factory composition only
    Local,
    /// Descriptors from the text-generation collaborator
    Remote,
}

/// Lifecycle of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationStatus {
    Started,
    Applied { count: usize, source: BatchSource },
    /// A newer request superseded this one
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMessage {
    pub token: u64,
    pub prompt: String,
    #[serde(flatten)]
    pub status: GenerationStatus,
}

/// Any message type (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Text(TextMessage),
    Eviction(EvictionMessage),
    Generation(GenerationMessage),
}

impl Message {
    /// Create an info message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::text(MessageLevel::Info, text)
    }

    /// Create a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self::text(MessageLevel::Success, text)
    }

    /// Create a warning message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::text(MessageLevel::Warning, text)
    }

    pub fn evicted(list: ListKind, label: impl Into<String>) -> Self {
        Self::Eviction(EvictionMessage {
            list,
            label: label.into(),
        })
    }

    pub fn generation(token: u64, prompt: impl Into<String>, status: GenerationStatus) -> Self {
        Self::Generation(GenerationMessage {
            token,
            prompt: prompt.into(),
            status,
        })
    }

    fn text(level: MessageLevel, text: impl Into<String>) -> Self {
        Self::Text(TextMessage {
            level,
            text: text.into(),
        })
    }

    /// One-line rendering for plain-text frontends.
    pub fn to_log_line(&self) -> String {
        match self {
            Self::Text(TextMessage { level, text }) => match level {
                MessageLevel::Info => format!("ℹ {}", text),
                MessageLevel::Success => format!("✅ {}", text),
                MessageLevel::Warning => format!("⚠️ {}", text),
            },
            Self::Eviction(EvictionMessage { list, label }) => {
                let list = match list {
                    ListKind::ChatHistory => "chat history",
                    ListKind::Projects => "projects",
                };
                format!("ℹ Removed oldest entry from {}: {}", list, label)
            }
            Self::Generation(GenerationMessage {
                token,
                prompt,
                status,
            }) => match status {
                GenerationStatus::Started => format!("… Generating #{} for \"{}\"", token, prompt),
                GenerationStatus::Applied { count, source } => {
                    let source = match source {
                        BatchSource::Local => "local",
                        BatchSource::Remote => "remote",
                    };
                    format!("… #{} applied {} layouts ({})", token, count, source)
                }
                GenerationStatus::Discarded => {
                    format!("… #{} superseded by a newer request, discarded", token)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_message_serializes_flat() {
        let msg = Message::generation(
            4,
            "Todo app",
            GenerationStatus::Applied {
                count: 3,
                source: BatchSource::Local,
            },
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "generation");
        assert_eq!(json["status"], "applied");
        assert_eq!(json["count"], 3);
        assert_eq!(json["source"], "local");
    }

    #[test]
    fn test_log_lines() {
        assert!(Message::success("3 layouts generated successfully!")
            .to_log_line()
            .contains("3 layouts"));
        assert!(Message::evicted(ListKind::Projects, "Old")
            .to_log_line()
            .contains("projects: Old"));
        assert!(Message::generation(2, "p", GenerationStatus::Discarded)
            .to_log_line()
            .contains("#2"));
    }
}
