//! REPL command parsing.
//!
//! Projects and chat entries are addressed by their 1-based position in the
//! newest-first list, layouts by their id within the containing batch.

use thiserror::Error;

use crate::catalog::AppThemeKind;
use crate::layout::LayoutId;
use crate::workspace::{parse_bool, SettingsUpdate, View};

/// Layout to show in the expanded-layout modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandTarget {
    Batch(LayoutId),
    /// Zero-based project position and layout id
    Project(usize, LayoutId),
    /// Zero-based chat entry position and layout id
    Chat(usize, LayoutId),
}

/// A user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Generate(String),
    SetPrompt(String),
    EditFont(LayoutId),
    EditColor(LayoutId),
    Regenerate(LayoutId),
    Save(LayoutId),
    Expand(ExpandTarget),
    CloseExpanded,
    Navigate(View),
    SelectProject(usize),
    LoadProject(usize),
    DeleteProject(usize),
    RenameProject(usize, String),
    SelectChat(usize),
    LoadChat(usize),
    DeleteChat(usize),
    ClearSelection,
    UpdateSettings(SettingsUpdate),
    StartNew,
    Status,
    List,
    Show(LayoutId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },
}

pub const HELP: &str = "\
Commands:
  generate [prompt]            Generate a batch of layouts
  prompt <text>                Set the prompt without generating
  font <id> | color <id>       Cycle a layout's font or color theme
  regen <id>                   Restyle a layout at random
  save <id>                    Save a layout as a project
  open <id>                    Expand a layout from the active batch
  open project <n> <id>        Expand a layout from a project
  open chat <n> <id>           Expand a layout from a chat entry
  close                        Close the expanded layout
  view <home|projects|chats|settings>
  project <select|load|delete> <n>
  project rename <n> <name>
  chat <select|load|delete> <n>
  back                         Clear the drill-down selection
  set auto-save <on|off>
  set layouts <2-5>
  set name <display name>
  set theme <dark|light|midnight>
  new                          Start over with an empty workspace
  list | status | show <id>
  help | quit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = split_word(line);

        let command = match word.to_lowercase().as_str() {
            "generate" | "gen" | "g" => Self::Generate(rest.to_string()),
            "prompt" => Self::SetPrompt(rest.to_string()),
            "font" => Self::EditFont(parse_layout_id(rest)?),
            "color" | "colour" | "style" => Self::EditColor(parse_layout_id(rest)?),
            "regen" | "regenerate" => Self::Regenerate(parse_layout_id(rest)?),
            "save" => Self::Save(parse_layout_id(rest)?),
            "open" | "expand" => Self::Expand(parse_expand(rest)?),
            "close" => Self::CloseExpanded,
            "view" | "go" => {
                let name = required(rest, "view")?;
                Self::Navigate(View::parse(name).ok_or_else(|| invalid("view", name))?)
            }
            "project" | "projects" if rest.is_empty() => Self::Navigate(View::Projects),
            "chat" | "chats" if rest.is_empty() => Self::Navigate(View::Chats),
            "project" => parse_project(rest)?,
            "chat" => parse_chat(rest)?,
            "back" => Self::ClearSelection,
            "set" => Self::UpdateSettings(parse_setting(rest)?),
            "new" => Self::StartNew,
            "status" => Self::Status,
            "list" | "ls" => Self::List,
            "show" => Self::Show(parse_layout_id(rest)?),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn required<'a>(value: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(value)
    }
}

fn invalid(what: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        what,
        value: value.to_string(),
    }
}

fn parse_layout_id(value: &str) -> Result<LayoutId, CommandError> {
    let value = required(value, "layout id")?;
    value
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .map(LayoutId)
        .ok_or_else(|| invalid("layout id", value))
}

/// 1-based list position to a zero-based index.
fn parse_position(value: &str) -> Result<usize, CommandError> {
    let value = required(value, "position")?;
    value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| invalid("position", value))
}

fn parse_expand(rest: &str) -> Result<ExpandTarget, CommandError> {
    let (first, tail) = split_word(required(rest, "layout id")?);
    match first.to_lowercase().as_str() {
        "project" | "chat" => {
            let (position, id) = split_word(tail);
            let position = parse_position(position)?;
            let id = parse_layout_id(id)?;
            Ok(if first.eq_ignore_ascii_case("project") {
                ExpandTarget::Project(position, id)
            } else {
                ExpandTarget::Chat(position, id)
            })
        }
        _ => Ok(ExpandTarget::Batch(parse_layout_id(rest)?)),
    }
}

fn parse_project(rest: &str) -> Result<Command, CommandError> {
    let (action, tail) = split_word(rest);
    match action.to_lowercase().as_str() {
        "select" => Ok(Command::SelectProject(parse_position(tail)?)),
        "load" => Ok(Command::LoadProject(parse_position(tail)?)),
        "delete" | "rm" => Ok(Command::DeleteProject(parse_position(tail)?)),
        "rename" => {
            let (position, name) = split_word(tail);
            Ok(Command::RenameProject(
                parse_position(position)?,
                name.to_string(),
            ))
        }
        _ => Err(invalid("project action", action)),
    }
}

fn parse_chat(rest: &str) -> Result<Command, CommandError> {
    let (action, tail) = split_word(rest);
    match action.to_lowercase().as_str() {
        "select" => Ok(Command::SelectChat(parse_position(tail)?)),
        "load" => Ok(Command::LoadChat(parse_position(tail)?)),
        "delete" | "rm" => Ok(Command::DeleteChat(parse_position(tail)?)),
        _ => Err(invalid("chat action", action)),
    }
}

fn parse_setting(rest: &str) -> Result<SettingsUpdate, CommandError> {
    let (key, value) = split_word(required(rest, "setting")?);
    let value = required(value, "setting value")?;
    let update = match key.to_lowercase().replace('_', "-").as_str() {
        "auto-save" | "autosave" => {
            SettingsUpdate::auto_save(parse_bool(value).ok_or_else(|| invalid("boolean", value))?)
        }
        "layouts" => SettingsUpdate::layouts_per_generation(
            value
                .parse()
                .map_err(|_| invalid("layout count", value))?,
        ),
        "name" => SettingsUpdate {
            display_name: Some(value.to_string()),
            ..SettingsUpdate::default()
        },
        "theme" => SettingsUpdate {
            app_theme: Some(AppThemeKind::parse(value).ok_or_else(|| invalid("app theme", value))?),
            ..SettingsUpdate::default()
        },
        _ => return Err(invalid("setting", key)),
    };
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_generate_keeps_full_prompt() {
        assert_eq!(
            parse("generate  Todo app for teams "),
            Command::Generate("Todo app for teams".to_string())
        );
        assert_eq!(parse("generate"), Command::Generate(String::new()));
    }

    #[test]
    fn test_layout_commands() {
        assert_eq!(parse("font 2"), Command::EditFont(LayoutId(2)));
        assert_eq!(parse("color 1"), Command::EditColor(LayoutId(1)));
        assert_eq!(parse("regen 3"), Command::Regenerate(LayoutId(3)));
        assert_eq!(parse("SAVE 1"), Command::Save(LayoutId(1)));
    }

    #[test]
    fn test_bad_layout_id() {
        assert_eq!(
            Command::parse("font").unwrap_err(),
            CommandError::MissingArgument("layout id")
        );
        assert!(matches!(
            Command::parse("font zero").unwrap_err(),
            CommandError::InvalidArgument { what: "layout id", .. }
        ));
        assert!(Command::parse("font 0").is_err());
    }

    #[test]
    fn test_expand_targets() {
        assert_eq!(parse("open 2"), Command::Expand(ExpandTarget::Batch(LayoutId(2))));
        assert_eq!(
            parse("open project 1 1"),
            Command::Expand(ExpandTarget::Project(0, LayoutId(1)))
        );
        assert_eq!(
            parse("open chat 3 2"),
            Command::Expand(ExpandTarget::Chat(2, LayoutId(2)))
        );
        assert!(Command::parse("open chat 0 1").is_err());
    }

    #[test]
    fn test_project_and_chat_actions() {
        assert_eq!(parse("project load 2"), Command::LoadProject(1));
        assert_eq!(
            parse("project rename 1 My Shop"),
            Command::RenameProject(0, "My Shop".to_string())
        );
        assert_eq!(parse("chat delete 1"), Command::DeleteChat(0));
        assert_eq!(parse("projects"), Command::Navigate(View::Projects));
        assert!(Command::parse("chat rename 1 x").is_err());
    }

    #[test]
    fn test_settings() {
        assert_eq!(
            parse("set auto-save on"),
            Command::UpdateSettings(SettingsUpdate::auto_save(true))
        );
        assert_eq!(
            parse("set layouts 4"),
            Command::UpdateSettings(SettingsUpdate::layouts_per_generation(4))
        );
        assert!(Command::parse("set layouts many").is_err());
        assert!(Command::parse("set colour blue").is_err());
        assert!(Command::parse("set theme").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("dance now").unwrap_err(),
            CommandError::Unknown("dance".to_string())
        );
    }
}
