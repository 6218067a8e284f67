//! Saved projects and chat history entries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::layout::{Layout, LayoutId};

/// Identifier of a saved project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(pub Uuid);

/// Identifier of a chat history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChatEntryId(pub Uuid);

/// A user-named, saved collection of layouts.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Snapshot copies; never shared with the live batch
    pub layouts: Vec<Layout>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Snapshot a batch into a new project.
    pub fn from_batch(name: impl Into<String>, batch: &[Layout]) -> Self {
        Self {
            id: ProjectId(Uuid::new_v4()),
            name: name.into(),
            layouts: batch.to_vec(),
            created_at: Utc::now(),
        }
    }

    /// Single-layout project holding an independent copy of `layout`.
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            id: ProjectId(Uuid::new_v4()),
            name: layout.title.clone(),
            layouts: vec![layout.with_id(LayoutId::from_position(0))],
            created_at: Utc::now(),
        }
    }

    pub fn layout(&self, id: LayoutId) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == id)
    }
}

/// Snapshot of one generation request and its batch.
#[derive(Debug, Clone, Serialize)]
pub struct ChatHistoryEntry {
    pub id: ChatEntryId,
    pub source_prompt: String,
    pub layouts: Vec<Layout>,
    pub date: DateTime<Utc>,
}

impl ChatHistoryEntry {
    pub fn new(prompt: impl Into<String>, batch: &[Layout]) -> Self {
        Self {
            id: ChatEntryId(Uuid::new_v4()),
            source_prompt: prompt.into(),
            layouts: batch.to_vec(),
            date: Utc::now(),
        }
    }

    pub fn layout(&self, id: LayoutId) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == id)
    }
}
