//! Workspace store.
//!
//! The [`Workspace`] is the single aggregate holding all session state: the
//! prompt, the active batch, bounded chat history and project lists, settings
//! and the view/modal controller. Every operation is one atomic transition;
//! operations that validate input leave the workspace untouched on failure.
//!
//! User-facing notices produced by transitions are queued and collected with
//! [`Workspace::take_messages`].

mod bounded;
mod entries;
mod settings;
mod view;

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::factory::LayoutFactory;
use crate::layout::{Layout, LayoutId};
use crate::messaging::{BatchSource, GenerationStatus, ListKind, Message};
use crate::remote::LayoutDescriptor;

pub use bounded::{BoundedList, LIST_CAPACITY};
pub use entries::{ChatEntryId, ChatHistoryEntry, Project, ProjectId};
pub use settings::{parse_bool, Settings, SettingsUpdate};
pub use view::{LayoutRef, View};

/// Rejected workspace operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("Please enter a prompt first!")]
    EmptyPrompt,

    #[error("Project name cannot be empty")]
    EmptyName,
}

/// Identifies one generation request. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All session state.
pub struct Workspace {
    prompt: String,
    batch: Vec<Layout>,
    view: View,
    expanded: Option<LayoutRef>,
    selected_project: Option<ProjectId>,
    selected_chat: Option<ChatEntryId>,
    settings: Settings,
    history: BoundedList<ChatHistoryEntry>,
    projects: BoundedList<Project>,
    factory: LayoutFactory,
    next_token: u64,
    /// Latest issued generation that has not completed yet
    pending: Option<(RequestToken, String)>,
    outbox: Vec<Message>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Workspace {
    pub fn new(settings: Settings) -> Self {
        Self::with_factory(settings, LayoutFactory::new())
    }

    /// Workspace driven by a specific factory, e.g. a seeded one.
    pub fn with_factory(settings: Settings, factory: LayoutFactory) -> Self {
        Self {
            prompt: String::new(),
            batch: Vec::new(),
            view: View::default(),
            expanded: None,
            selected_project: None,
            selected_chat: None,
            settings,
            history: BoundedList::default(),
            projects: BoundedList::default(),
            factory,
            next_token: 0,
            pending: None,
            outbox: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Character count shown under the prompt box.
    pub fn prompt_char_count(&self) -> usize {
        self.prompt.chars().count()
    }

    pub fn batch(&self) -> &[Layout] {
        &self.batch
    }

    /// Layout of the active batch.
    pub fn layout(&self, id: LayoutId) -> Option<&Layout> {
        self.batch.iter().find(|l| l.id == id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &BoundedList<ChatHistoryEntry> {
        &self.history
    }

    pub fn projects(&self) -> &BoundedList<Project> {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.find(|p| p.id == id)
    }

    pub fn chat_entry(&self, id: ChatEntryId) -> Option<&ChatHistoryEntry> {
        self.history.find(|e| e.id == id)
    }

    /// Whether a generation has been issued and not yet applied.
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_token(&self) -> Option<RequestToken> {
        self.pending.as_ref().map(|(token, _)| *token)
    }

    /// Drain queued notices.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.outbox)
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Generate a batch immediately with local composition.
    pub fn generate(&mut self, prompt: &str) -> Result<&[Layout], WorkspaceError> {
        let token = self.begin_generation(prompt)?;
        self.complete_generation(token, &[]);
        Ok(&self.batch)
    }

    /// Issue a new generation request for `prompt`.
    ///
    /// Any generation still in flight becomes stale and will be discarded
    /// when it completes.
    pub fn begin_generation(&mut self, prompt: &str) -> Result<RequestToken, WorkspaceError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(WorkspaceError::EmptyPrompt);
        }

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        if let Some((stale, _)) = self.pending.replace((token, prompt.to_string())) {
            debug!(stale = %stale, latest = %token, "Superseding in-flight generation");
        }
        self.prompt = prompt.to_string();
        self.outbox
            .push(Message::generation(token.0, prompt, GenerationStatus::Started));
        Ok(token)
    }

    /// Apply the result of generation `token`.
    ///
    /// A fresh batch is composed locally and `descriptors` are overlaid onto it
    /// position by position. Returns `false` without touching the batch when
    /// `token` is not the latest issued request.
    pub fn complete_generation(
        &mut self,
        token: RequestToken,
        descriptors: &[LayoutDescriptor],
    ) -> bool {
        let prompt = match self.pending.take() {
            Some((latest, prompt)) if latest == token => prompt,
            other => {
                self.pending = other;
                debug!(token = %token, "Discarding stale generation result");
                self.outbox.push(Message::generation(
                    token.0,
                    String::new(),
                    GenerationStatus::Discarded,
                ));
                return false;
            }
        };

        let mut batch = self
            .factory
            .make_batch(&prompt, self.settings.layouts_per_generation);
        for (layout, descriptor) in batch.iter_mut().zip(descriptors) {
            overlay(layout, descriptor);
        }
        let source = if descriptors.is_empty() {
            BatchSource::Local
        } else {
            BatchSource::Remote
        };

        let count = batch.len();
        self.apply_batch(&prompt, batch);
        self.outbox.push(Message::generation(
            token.0,
            prompt,
            GenerationStatus::Applied { count, source },
        ));
        self.outbox.push(Message::success(format!(
            "{} layouts generated successfully!",
            count
        )));
        true
    }

    fn apply_batch(&mut self, prompt: &str, batch: Vec<Layout>) {
        if matches!(self.expanded, Some(LayoutRef::Batch(_))) {
            self.expanded = None;
        }
        self.record_history(ChatHistoryEntry::new(prompt, &batch));
        if self.settings.auto_save {
            self.record_project(Project::from_batch(prompt, &batch));
        }
        self.batch = batch;
        self.drop_dangling_modal();
        info!(prompt, count = self.batch.len(), "Applied layout batch");
    }

    /// Drop the in-flight generation so its completion is discarded.
    fn invalidate_pending(&mut self) {
        if let Some((token, _)) = self.pending.take() {
            debug!(token = %token, "Invalidated in-flight generation");
        }
    }

    fn record_history(&mut self, entry: ChatHistoryEntry) {
        if let Some(evicted) = self.history.push(entry) {
            if self.selected_chat == Some(evicted.id) {
                self.selected_chat = None;
            }
            info!(prompt = %evicted.source_prompt, "Evicted oldest chat history entry");
            self.outbox
                .push(Message::evicted(ListKind::ChatHistory, evicted.source_prompt));
            self.drop_dangling_modal();
        }
    }

    fn record_project(&mut self, project: Project) -> ProjectId {
        let id = project.id;
        if let Some(evicted) = self.projects.push(project) {
            if self.selected_project == Some(evicted.id) {
                self.selected_project = None;
            }
            info!(name = %evicted.name, "Evicted oldest project");
            self.outbox
                .push(Message::evicted(ListKind::Projects, evicted.name));
            self.drop_dangling_modal();
        }
        id
    }

    // =========================================================================
    // Per-layout edits
    // =========================================================================

    /// Cycle the font of a batch layout. No-op if `id` is absent.
    pub fn edit_font(&mut self, id: LayoutId) -> bool {
        let catalog = *self.factory.catalog();
        let Some(layout) = self.batch.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        layout.set_font(catalog.next_font(layout.font));
        debug!(%id, font = layout.font.name, "Font cycled");
        self.outbox
            .push(Message::info(format!("Font changed for layout {}", id)));
        true
    }

    /// Cycle the theme of a batch layout. No-op if `id` is absent.
    pub fn edit_color(&mut self, id: LayoutId) -> bool {
        let catalog = *self.factory.catalog();
        let Some(layout) = self.batch.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        layout.set_theme(catalog.next_theme(layout.theme));
        debug!(%id, theme = layout.theme.name, "Theme cycled");
        self.outbox
            .push(Message::info(format!("Style updated for layout {}", id)));
        true
    }

    /// Restyle a batch layout at random. No-op if `id` is absent.
    pub fn regenerate(&mut self, id: LayoutId) -> bool {
        if self.layout(id).is_none() {
            return false;
        }
        let (theme, font, variant) = self.factory.random_style();
        if let Some(layout) = self.batch.iter_mut().find(|l| l.id == id) {
            layout.restyle(theme, font, variant);
        }
        debug!(%id, theme = theme.name, font = font.name, variant = variant.as_str(), "Layout regenerated");
        self.outbox
            .push(Message::info(format!("Layout {} regenerated", id)));
        true
    }

    // =========================================================================
    // Projects and chat history
    // =========================================================================

    /// Save an independent copy of `layout` as a single-layout project.
    pub fn save_as_project(&mut self, layout: &Layout) -> ProjectId {
        let project = Project::from_layout(layout);
        let name = project.name.clone();
        let id = self.record_project(project);
        self.outbox
            .push(Message::success(format!("Saved \"{}\" to projects", name)));
        id
    }

    pub fn delete_project(&mut self, id: ProjectId) -> bool {
        let Some(index) = self.projects.position(|p| p.id == id) else {
            return false;
        };
        self.projects.remove(index);
        if self.selected_project == Some(id) {
            self.selected_project = None;
        }
        self.drop_dangling_modal();
        debug!(?id, "Project deleted");
        true
    }

    /// Delete the chat entry at `index` (0 is the newest).
    pub fn delete_chat_entry(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.remove(index) else {
            return false;
        };
        if self.selected_chat == Some(entry.id) {
            self.selected_chat = None;
        }
        self.drop_dangling_modal();
        debug!(index, prompt = %entry.source_prompt, "Chat entry deleted");
        true
    }

    /// Replace the active batch with copies of a project's layouts.
    pub fn load_project(&mut self, id: ProjectId) -> bool {
        let Some(project) = self.project(id) else {
            return false;
        };
        let (name, layouts) = (project.name.clone(), project.layouts.clone());
        self.load(name, layouts);
        self.selected_project = Some(id);
        true
    }

    /// Replace the active batch with copies of a chat entry's layouts.
    pub fn load_chat_entry(&mut self, id: ChatEntryId) -> bool {
        let Some(entry) = self.chat_entry(id) else {
            return false;
        };
        let (prompt, layouts) = (entry.source_prompt.clone(), entry.layouts.clone());
        self.load(prompt, layouts);
        self.selected_chat = Some(id);
        true
    }

    fn load(&mut self, prompt: String, layouts: Vec<Layout>) {
        self.invalidate_pending();
        debug!(prompt = %prompt, count = layouts.len(), "Loading layouts into workspace");
        self.prompt = prompt;
        self.batch = layouts;
        self.expanded = None;
        self.view = View::Home;
    }

    /// Rename a project in place. `Ok(false)` if the project is absent.
    pub fn rename_project(&mut self, id: ProjectId, name: &str) -> Result<bool, WorkspaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        match self.projects.find_mut(|p| p.id == id) {
            Some(project) => {
                project.name = name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if update.is_empty() {
            return;
        }
        self.settings.apply(update);
        debug!(settings = ?self.settings, "Settings updated");
    }
}

fn overlay(layout: &mut Layout, descriptor: &LayoutDescriptor) {
    if !descriptor.title.is_empty() {
        layout.title = descriptor.title.clone();
    }
    if !descriptor.description.is_empty() {
        layout.description = descriptor.description.clone();
    }
    if !descriptor.html.is_empty() {
        layout.markup = descriptor.html.clone();
    }
}
