//! Application event loop core.
//!
//! [`App`] owns the single [`Workspace`] and applies one [`AppEvent`] at a
//! time. Generations run as spawned tasks that only fetch descriptors; their
//! outcomes come back through the event channel and are applied here, so all
//! workspace mutation stays on the loop.

mod command;
mod event;
mod render;

use tokio::sync::mpsc;
use tracing::debug;

use crate::generation::{GenerationOutcome, Generator};
use crate::layout::LayoutId;
use crate::messaging::{Message, MessageBus, MessageReceiver, MessageSender};
use crate::workspace::{LayoutRef, RequestToken, Workspace};

pub use command::{Command, CommandError, ExpandTarget, HELP};
pub use event::AppEvent;
pub use render::{batch_lines, layout_detail, layout_line, status_lines, view_lines};

/// Workspace plus the machinery around it.
pub struct App {
    workspace: Workspace,
    generator: Generator,
    bus: MessageBus,
    sender: MessageSender,
    events: mpsc::UnboundedSender<AppEvent>,
    in_flight: usize,
    should_quit: bool,
}

impl App {
    /// `events` receives generation outcomes; feed them back to [`App::handle_event`].
    pub fn new(
        workspace: Workspace,
        generator: Generator,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let bus = MessageBus::new();
        let sender = bus.sender();
        Self {
            workspace,
            generator,
            bus,
            sender,
            events,
            in_flight: 0,
            should_quit: false,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Subscribe to workspace notices.
    pub fn subscribe(&self) -> MessageReceiver {
        self.bus.subscribe()
    }

    /// Whether spawned generations have yet to report back.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one event and return the text reply for the frontend.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<String> {
        let reply = match event {
            AppEvent::Command(command) => self.dispatch(command),
            AppEvent::GenerationFinished(outcome) => self.finish_generation(outcome),
        };
        self.sender.send_all(self.workspace.take_messages());
        reply
    }

    fn notify(&self, message: Message) {
        let _ = self.sender.send(message);
    }

    fn dispatch(&mut self, command: Command) -> Vec<String> {
        debug!(?command, "Dispatching command");
        let ws = &mut self.workspace;
        match command {
            Command::Generate(prompt) => {
                // A bare `generate` reuses the stored prompt
                let prompt = match prompt.trim() {
                    "" => ws.prompt().trim().to_string(),
                    given => given.to_string(),
                };
                match ws.begin_generation(&prompt) {
                    Ok(token) => {
                        let reply = format!("⏳ Generating layouts for \"{}\"...", prompt);
                        self.spawn_generation(token, prompt);
                        vec![reply]
                    }
                    Err(e) => {
                        self.notify(Message::warning(e.to_string()));
                        Vec::new()
                    }
                }
            }
            Command::SetPrompt(prompt) => {
                ws.set_prompt(prompt);
                vec![format!("Prompt: {} chars", ws.prompt_char_count())]
            }
            Command::EditFont(id) => self.edit(id, Workspace::edit_font),
            Command::EditColor(id) => self.edit(id, Workspace::edit_color),
            Command::Regenerate(id) => self.edit(id, Workspace::regenerate),
            Command::Save(id) => match ws.layout(id).cloned() {
                Some(layout) => {
                    ws.save_as_project(&layout);
                    Vec::new()
                }
                None => missing_layout(id),
            },
            Command::Expand(target) => {
                let target = match target {
                    ExpandTarget::Batch(id) => Some(LayoutRef::Batch(id)),
                    ExpandTarget::Project(position, id) => ws
                        .projects()
                        .get(position)
                        .map(|p| LayoutRef::Project(p.id, id)),
                    ExpandTarget::Chat(position, id) => ws
                        .history()
                        .get(position)
                        .map(|e| LayoutRef::Chat(e.id, id)),
                };
                match target {
                    Some(target) if ws.expand(target) => {
                        ws.expanded().map(layout_detail).unwrap_or_default()
                    }
                    _ => vec!["❌ No such layout".to_string()],
                }
            }
            Command::CloseExpanded => {
                ws.close_expanded();
                Vec::new()
            }
            Command::Navigate(view) => {
                ws.navigate(view);
                view_lines(ws)
            }
            Command::SelectProject(position) => {
                match ws.projects().get(position).map(|p| p.id) {
                    Some(id) if ws.select_project(id) => view_lines(ws),
                    _ => missing_entry("project", position),
                }
            }
            Command::LoadProject(position) => match ws.projects().get(position).map(|p| p.id) {
                Some(id) if ws.load_project(id) => view_lines(ws),
                _ => missing_entry("project", position),
            },
            Command::DeleteProject(position) => {
                match ws.projects().get(position).map(|p| p.id) {
                    Some(id) if ws.delete_project(id) => {
                        vec![format!("🗑 Deleted project {}", position + 1)]
                    }
                    _ => missing_entry("project", position),
                }
            }
            Command::RenameProject(position, name) => {
                let Some(id) = ws.projects().get(position).map(|p| p.id) else {
                    return missing_entry("project", position);
                };
                match ws.rename_project(id, &name) {
                    Ok(_) => vec![format!("Renamed project {} to \"{}\"", position + 1, name.trim())],
                    Err(e) => {
                        self.notify(Message::warning(e.to_string()));
                        Vec::new()
                    }
                }
            }
            Command::SelectChat(position) => match ws.history().get(position).map(|e| e.id) {
                Some(id) if ws.select_chat_entry(id) => view_lines(ws),
                _ => missing_entry("chat entry", position),
            },
            Command::LoadChat(position) => match ws.history().get(position).map(|e| e.id) {
                Some(id) if ws.load_chat_entry(id) => view_lines(ws),
                _ => missing_entry("chat entry", position),
            },
            Command::DeleteChat(position) => {
                if ws.delete_chat_entry(position) {
                    vec![format!("🗑 Deleted chat entry {}", position + 1)]
                } else {
                    missing_entry("chat entry", position)
                }
            }
            Command::ClearSelection => {
                ws.clear_selection();
                view_lines(ws)
            }
            Command::UpdateSettings(update) => {
                ws.update_settings(update);
                render::settings_lines(ws.settings())
            }
            Command::StartNew => {
                ws.start_new();
                vec!["✨ Started a new workspace".to_string()]
            }
            Command::Status => status_lines(ws),
            Command::List => batch_lines(ws.batch()),
            Command::Show(id) => match ws.layout(id) {
                Some(layout) => layout_detail(layout),
                None => missing_layout(id),
            },
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    fn edit(&mut self, id: LayoutId, op: fn(&mut Workspace, LayoutId) -> bool) -> Vec<String> {
        if !op(&mut self.workspace, id) {
            return missing_layout(id);
        }
        self.workspace
            .layout(id)
            .map(|layout| vec![layout_line(layout)])
            .unwrap_or_default()
    }

    fn spawn_generation(&mut self, token: RequestToken, prompt: String) {
        self.in_flight += 1;
        let generator = self.generator.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = generator.fetch(token, prompt).await;
            if events.send(AppEvent::GenerationFinished(outcome)).is_err() {
                debug!(token = %token, "Event loop gone before generation finished");
            }
        });
    }

    fn finish_generation(&mut self, outcome: GenerationOutcome) -> Vec<String> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self
            .workspace
            .complete_generation(outcome.token, &outcome.descriptors)
        {
            batch_lines(self.workspace.batch())
        } else {
            Vec::new()
        }
    }
}

fn missing_layout(id: LayoutId) -> Vec<String> {
    vec![format!("❌ No layout {} in the active batch", id)]
}

fn missing_entry(what: &str, position: usize) -> Vec<String> {
    vec![format!("❌ No {} at position {}", what, position + 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::factory::LayoutFactory;
    use crate::messaging::GenerationStatus;
    use crate::workspace::{Settings, View};
    use std::time::Duration;

    fn app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let workspace = Workspace::with_factory(
            Settings::default(),
            LayoutFactory::seeded(Catalog::builtin(), 5),
        );
        (App::new(workspace, Generator::offline(Duration::ZERO), tx), rx)
    }

    fn run(app: &mut App, line: &str) -> Vec<String> {
        let command = Command::parse(line).unwrap().unwrap();
        app.handle_event(command.into())
    }

    async fn settle(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppEvent>) {
        while app.is_busy() {
            let event = rx.recv().await.unwrap();
            app.handle_event(event);
        }
    }

    #[tokio::test]
    async fn test_generate_round_trip() {
        let (mut app, mut rx) = app();
        let mut notices = app.subscribe();

        let reply = run(&mut app, "generate Todo app");
        assert!(reply[0].contains("Todo app"));
        assert!(app.is_busy());
        assert!(app.workspace().batch().is_empty());

        settle(&mut app, &mut rx).await;
        assert_eq!(app.workspace().batch().len(), 3);
        let notices = notices.drain();
        assert!(notices.contains(&Message::success("3 layouts generated successfully!")));
    }

    #[tokio::test]
    async fn test_blank_generate_warns() {
        let (mut app, _rx) = app();
        let mut notices = app.subscribe();
        assert!(run(&mut app, "generate   ").is_empty());
        assert!(!app.is_busy());
        assert_eq!(
            notices.drain(),
            vec![Message::warning("Please enter a prompt first!")]
        );
    }

    #[tokio::test]
    async fn test_bare_generate_uses_stored_prompt() {
        let (mut app, mut rx) = app();
        run(&mut app, "prompt Bakery");
        let reply = run(&mut app, "generate");
        assert_eq!(reply, vec!["⏳ Generating layouts for \"Bakery\"...".to_string()]);
        assert!(app.is_busy());
        settle(&mut app, &mut rx).await;

        let batch = app.workspace().batch();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|l| l.source_prompt == "Bakery"));
    }

    #[tokio::test]
    async fn test_only_latest_generation_applies() {
        let (mut app, mut rx) = app();
        let mut notices = app.subscribe();
        run(&mut app, "generate first");
        run(&mut app, "generate second");
        settle(&mut app, &mut rx).await;

        assert!(app
            .workspace()
            .batch()
            .iter()
            .all(|l| l.source_prompt == "second"));
        assert_eq!(app.workspace().history().len(), 1);
        let discarded = notices
            .drain()
            .into_iter()
            .filter(|m| matches!(m, Message::Generation(g) if g.status == GenerationStatus::Discarded))
            .count();
        assert_eq!(discarded, 1);
    }

    #[tokio::test]
    async fn test_edit_and_save_commands() {
        let (mut app, mut rx) = app();
        run(&mut app, "generate Bakery");
        settle(&mut app, &mut rx).await;

        assert!(run(&mut app, "font 1")[0].starts_with("  [1]"));
        assert!(run(&mut app, "font 7")[0].contains("No layout 7"));
        run(&mut app, "save 2");
        assert_eq!(app.workspace().projects().len(), 1);

        let detail = run(&mut app, "open project 1 1");
        assert!(detail[0].starts_with("Layout 1:"));
        assert!(app.workspace().is_modal_open());
        run(&mut app, "close");
        assert!(!app.workspace().is_modal_open());
    }

    #[tokio::test]
    async fn test_load_chat_entry_command() {
        let (mut app, mut rx) = app();
        run(&mut app, "generate Bakery");
        settle(&mut app, &mut rx).await;
        run(&mut app, "new");
        assert!(app.workspace().batch().is_empty());

        run(&mut app, "chats");
        let lines = run(&mut app, "chat load 1");
        assert_eq!(app.workspace().view(), View::Home);
        assert_eq!(app.workspace().prompt(), "Bakery");
        assert_eq!(lines.len(), 4);
        assert!(run(&mut app, "chat load 4")[0].contains("position 4"));
    }

    #[tokio::test]
    async fn test_rename_rejects_blank_name() {
        let (mut app, mut rx) = app();
        run(&mut app, "set auto-save on");
        run(&mut app, "generate Bakery");
        settle(&mut app, &mut rx).await;

        let mut notices = app.subscribe();
        assert!(run(&mut app, "project rename 1").is_empty());
        assert_eq!(
            notices.drain(),
            vec![Message::warning("Project name cannot be empty")]
        );
        run(&mut app, "project rename 1 Corner Cafe");
        assert_eq!(app.workspace().projects().get(0).unwrap().name, "Corner Cafe");
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut app, _rx) = app();
        run(&mut app, "quit");
        assert!(app.should_quit());
    }
}
