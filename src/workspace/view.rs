//! View navigation and the expanded-layout modal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entries::{ChatEntryId, ProjectId};
use super::Workspace;
use crate::layout::{Layout, LayoutId};

/// Top-level views; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Projects,
    Chats,
    Settings,
}

impl View {
    pub fn all() -> &'static [View] {
        &[Self::Home, Self::Projects, Self::Chats, Self::Settings]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Chats => "chats",
            Self::Settings => "settings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Where an expanded layout lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRef {
    Batch(LayoutId),
    Project(ProjectId, LayoutId),
    Chat(ChatEntryId, LayoutId),
}

impl Workspace {
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch the top-level view. Drill-down selections and the modal are kept.
    pub fn navigate(&mut self, view: View) {
        debug!(from = ?self.view, to = ?view, "Navigate");
        self.view = view;
    }

    /// Drill into a project without loading it.
    pub fn select_project(&mut self, id: ProjectId) -> bool {
        if self.project(id).is_none() {
            return false;
        }
        self.selected_project = Some(id);
        true
    }

    /// Drill into a chat entry without loading it.
    pub fn select_chat_entry(&mut self, id: ChatEntryId) -> bool {
        if self.chat_entry(id).is_none() {
            return false;
        }
        self.selected_chat = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_project = None;
        self.selected_chat = None;
    }

    pub fn selected_project(&self) -> Option<ProjectId> {
        self.selected_project
    }

    pub fn selected_chat_entry(&self) -> Option<ChatEntryId> {
        self.selected_chat
    }

    /// Open the modal on a layout. Replaces any layout already expanded.
    ///
    /// Returns `false` and leaves the modal untouched if `target` does not resolve.
    pub fn expand(&mut self, target: LayoutRef) -> bool {
        if self.resolve(target).is_none() {
            return false;
        }
        self.expanded = Some(target);
        true
    }

    pub fn close_expanded(&mut self) {
        self.expanded = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.expanded.is_some()
    }

    pub fn expanded_ref(&self) -> Option<LayoutRef> {
        self.expanded
    }

    /// The layout currently shown in the modal.
    pub fn expanded(&self) -> Option<&Layout> {
        self.expanded.and_then(|target| self.resolve(target))
    }

    /// Reset to an empty Home view. Settings, history and projects are kept.
    pub fn start_new(&mut self) {
        self.invalidate_pending();
        self.prompt.clear();
        self.batch.clear();
        self.clear_selection();
        self.expanded = None;
        self.view = View::Home;
        debug!("Workspace reset");
    }

    pub(super) fn resolve(&self, target: LayoutRef) -> Option<&Layout> {
        match target {
            LayoutRef::Batch(id) => self.layout(id),
            LayoutRef::Project(project, id) => self.project(project)?.layout(id),
            LayoutRef::Chat(entry, id) => self.chat_entry(entry)?.layout(id),
        }
    }

    /// Close the modal if it points into something that no longer exists.
    pub(super) fn drop_dangling_modal(&mut self) {
        if let Some(target) = self.expanded {
            if self.resolve(target).is_none() {
                self.expanded = None;
            }
        }
    }
}
