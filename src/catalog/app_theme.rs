//! Application chrome themes, selectable from settings.
//!
//! These style the workspace itself, not the generated layouts.

use serde::{Deserialize, Serialize};

/// Identifier of an app-chrome theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppThemeKind {
    #[default]
    Dark,
    Light,
    Midnight,
}

/// Colors for the workspace chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppTheme {
    /// Background color for the main window
    pub background: &'static str,
    /// Background color for the sidebar/panels
    pub panel_background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    /// Accent color for interactive elements
    pub accent: &'static str,
}

impl AppThemeKind {
    pub fn all() -> &'static [AppThemeKind] {
        &[Self::Dark, Self::Light, Self::Midnight]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Midnight => "Midnight",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.display_name().eq_ignore_ascii_case(value.trim()))
    }

    /// Resolve the palette for this theme.
    pub fn palette(&self) -> AppTheme {
        match self {
            Self::Dark => AppTheme {
                background: "#1e1e1e",
                panel_background: "#252526",
                border: "#3c3c3c",
                text: "#cccccc",
                text_muted: "#808080",
                accent: "#0078d4",
            },
            Self::Light => AppTheme {
                background: "#ffffff",
                panel_background: "#f3f3f3",
                border: "#e5e5e5",
                text: "#1e1e1e",
                text_muted: "#6e6e6e",
                accent: "#0078d4",
            },
            Self::Midnight => AppTheme {
                background: "#0b1020",
                panel_background: "#111831",
                border: "#1f2a4d",
                text: "#dbe4ff",
                text_muted: "#7c89b6",
                accent: "#7c5cff",
            },
        }
    }
}
