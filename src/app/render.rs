//! Plain-text rendering of workspace state.

use crate::layout::Layout;
use crate::workspace::{ChatHistoryEntry, Project, Settings, View, Workspace};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One-line layout summary.
pub fn layout_line(layout: &Layout) -> String {
    format!(
        "  [{}] {} · {} / {} / {}",
        layout.id,
        layout.title,
        layout.theme.name,
        layout.font.name,
        layout.variant.display_name()
    )
}

pub fn batch_lines(layouts: &[Layout]) -> Vec<String> {
    if layouts.is_empty() {
        return vec!["  (no layouts yet)".to_string()];
    }
    layouts.iter().map(layout_line).collect()
}

/// Full detail of one layout, markup included.
pub fn layout_detail(layout: &Layout) -> Vec<String> {
    vec![
        format!("Layout {}: {}", layout.id, layout.title),
        format!("  {}", layout.description),
        format!(
            "  Theme: {}  Font: {} ({})  Variant: {}",
            layout.theme.name,
            layout.font.name,
            layout.font.family,
            layout.variant.display_name()
        ),
        format!("  Prompt: {}", layout.source_prompt),
        format!("  Created: {}", layout.created_at.format(DATE_FORMAT)),
        layout.markup.clone(),
    ]
}

fn project_line(position: usize, project: &Project) -> String {
    format!(
        "  {}. {} ({} layouts, {})",
        position + 1,
        project.name,
        project.layouts.len(),
        project.created_at.format(DATE_FORMAT)
    )
}

fn chat_line(position: usize, entry: &ChatHistoryEntry) -> String {
    format!(
        "  {}. {} ({} layouts, {})",
        position + 1,
        entry.source_prompt,
        entry.layouts.len(),
        entry.date.format(DATE_FORMAT)
    )
}

pub fn settings_lines(settings: &Settings) -> Vec<String> {
    let palette = settings.app_theme.palette();
    vec![
        format!("  Display name:  {}", settings.display_name),
        format!(
            "  Auto-save:     {}",
            if settings.auto_save { "on" } else { "off" }
        ),
        format!("  Layouts:       {}", settings.layouts_per_generation),
        format!(
            "  App theme:     {} (background {}, accent {})",
            settings.app_theme.display_name(),
            palette.background,
            palette.accent
        ),
    ]
}

/// Contents of the active view, honoring drill-down selections.
pub fn view_lines(ws: &Workspace) -> Vec<String> {
    let mut lines = Vec::new();
    match ws.view() {
        View::Home => {
            lines.push(format!(
                "Home · prompt: \"{}\" ({} chars)",
                ws.prompt(),
                ws.prompt_char_count()
            ));
            lines.extend(batch_lines(ws.batch()));
        }
        View::Projects => match ws.selected_project().and_then(|id| ws.project(id)) {
            Some(project) => {
                lines.push(format!("Project: {}", project.name));
                lines.extend(batch_lines(&project.layouts));
            }
            None => {
                lines.push(format!("Projects ({})", ws.projects().len()));
                lines.extend(ws.projects().iter().enumerate().map(|(i, p)| project_line(i, p)));
            }
        },
        View::Chats => match ws.selected_chat_entry().and_then(|id| ws.chat_entry(id)) {
            Some(entry) => {
                lines.push(format!("Chat: {}", entry.source_prompt));
                lines.extend(batch_lines(&entry.layouts));
            }
            None => {
                lines.push(format!("Chat history ({})", ws.history().len()));
                lines.extend(ws.history().iter().enumerate().map(|(i, e)| chat_line(i, e)));
            }
        },
        View::Settings => {
            lines.push("Settings".to_string());
            lines.extend(settings_lines(ws.settings()));
        }
    }
    lines
}

pub fn status_lines(ws: &Workspace) -> Vec<String> {
    let mut lines = vec![
        "📊 Current Status".to_string(),
        format!("  View:          {}", ws.view().as_str()),
        format!(
            "  Prompt:        \"{}\" ({} chars)",
            ws.prompt(),
            ws.prompt_char_count()
        ),
        format!("  Layouts:       {}", ws.batch().len()),
        format!("  Chat history:  {}", ws.history().len()),
        format!("  Projects:      {}", ws.projects().len()),
        format!(
            "  Generating:    {}",
            if ws.is_generating() { "yes" } else { "no" }
        ),
    ];
    if let Some(layout) = ws.expanded() {
        lines.push(format!("  Expanded:      [{}] {}", layout.id, layout.title));
    }
    lines.extend(settings_lines(ws.settings()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::factory::LayoutFactory;

    fn workspace() -> Workspace {
        Workspace::with_factory(Settings::default(), LayoutFactory::seeded(Catalog::builtin(), 8))
    }

    #[test]
    fn test_home_lists_batch() {
        let mut ws = workspace();
        assert!(view_lines(&ws)[1].contains("no layouts"));
        ws.generate("Todo app").unwrap();
        let lines = view_lines(&ws);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("(8 chars)"));
        assert!(lines[1].starts_with("  [1] Todo app — "));
    }

    #[test]
    fn test_chats_drill_down() {
        let mut ws = workspace();
        ws.generate("Bakery").unwrap();
        ws.navigate(View::Chats);
        assert!(view_lines(&ws)[1].starts_with("  1. Bakery (3 layouts"));
        let id = ws.history().get(0).unwrap().id;
        ws.select_chat_entry(id);
        assert_eq!(view_lines(&ws)[0], "Chat: Bakery");
    }

    #[test]
    fn test_status_shows_expanded() {
        let mut ws = workspace();
        ws.generate("Bakery").unwrap();
        ws.expand(crate::workspace::LayoutRef::Batch(crate::layout::LayoutId(2)));
        assert!(status_lines(&ws).iter().any(|l| l.starts_with("  Expanded:      [2]")));
    }

    #[test]
    fn test_settings_show_app_theme_palette() {
        let lines = settings_lines(&Settings::default());
        assert_eq!(
            lines[3],
            "  App theme:     Dark (background #1e1e1e, accent #0078d4)"
        );
    }
}
