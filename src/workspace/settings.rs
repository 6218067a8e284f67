//! Process-wide workspace settings.
//!
//! Settings live only for the lifetime of the process. Updates are partial
//! merges and never fail: out-of-range values are clamped.

use serde::{Deserialize, Serialize};

use crate::catalog::AppThemeKind;
use crate::factory::clamp_batch_size;

/// Current workspace settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Save every generated batch as a project
    pub auto_save: bool,
    /// Name shown in the workspace chrome
    pub display_name: String,
    /// Layouts per generation, always within the batch bounds
    pub layouts_per_generation: usize,
    pub app_theme: AppThemeKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_save: false,
            display_name: "Designer".to_string(),
            layouts_per_generation: 3,
            app_theme: AppThemeKind::default(),
        }
    }
}

/// A partial settings change. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub auto_save: Option<bool>,
    pub display_name: Option<String>,
    pub layouts_per_generation: Option<usize>,
    pub app_theme: Option<AppThemeKind>,
}

impl SettingsUpdate {
    pub fn auto_save(enabled: bool) -> Self {
        Self {
            auto_save: Some(enabled),
            ..Self::default()
        }
    }

    pub fn layouts_per_generation(count: usize) -> Self {
        Self {
            layouts_per_generation: Some(count),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.auto_save.is_none()
            && self.display_name.is_none()
            && self.layouts_per_generation.is_none()
            && self.app_theme.is_none()
    }
}

impl Settings {
    /// Merge `update` into these settings.
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(enabled) = update.auto_save {
            self.auto_save = enabled;
        }
        if let Some(name) = update.display_name {
            self.display_name = name;
        }
        if let Some(count) = update.layouts_per_generation {
            self.layouts_per_generation = clamp_batch_size(count);
        }
        if let Some(theme) = update.app_theme {
            self.app_theme = theme;
        }
    }
}

/// Parse a boolean from various string representations.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Some(true),
        "false" | "0" | "no" | "off" | "disabled" => Some(false),
        _ => None,
    }
}
