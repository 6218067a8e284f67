//! The generated layout entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::catalog::{Font, Theme, VariantKind};
use crate::compose::compose;

/// Identifier of a layout, unique within its containing batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LayoutId(pub u32);

impl LayoutId {
    /// Id for the layout at `index` in a batch (ids start at 1).
    pub fn from_position(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generated mock-up plus its styling and metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub id: LayoutId,
    pub title: String,
    pub description: String,
    pub markup: String,
    pub theme: &'static Theme,
    pub font: &'static Font,
    pub source_prompt: String,
    pub created_at: DateTime<Utc>,
    pub variant: VariantKind,
}

impl Layout {
    /// Build and compose a layout.
    pub fn new(
        id: LayoutId,
        prompt: &str,
        theme: &'static Theme,
        font: &'static Font,
        variant: VariantKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title_for(prompt, variant),
            description: variant.description().to_string(),
            markup: compose(prompt, theme, font, variant),
            theme,
            font,
            source_prompt: prompt.to_string(),
            created_at,
            variant,
        }
    }

    /// Swap the font and recompose. Title and description are unchanged.
    pub fn set_font(&mut self, font: &'static Font) {
        self.font = font;
        self.recompose();
    }

    /// Swap the theme and recompose. Title and description are unchanged.
    pub fn set_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
        self.recompose();
    }

    /// Replace theme, font and variant at once, refreshing title and description.
    pub fn restyle(&mut self, theme: &'static Theme, font: &'static Font, variant: VariantKind) {
        self.theme = theme;
        self.font = font;
        self.variant = variant;
        self.title = title_for(&self.source_prompt, variant);
        self.description = variant.description().to_string();
        self.recompose();
    }

    /// Copy of this layout carrying a different id.
    pub fn with_id(&self, id: LayoutId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    fn recompose(&mut self) {
        self.markup = compose(&self.source_prompt, self.theme, self.font, self.variant);
    }
}

/// `"{prompt} — {Variant}"`
pub fn title_for(prompt: &str, variant: VariantKind) -> String {
    format!("{} — {}", prompt, variant.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FONTS, THEMES};

    fn sample() -> Layout {
        Layout::new(
            LayoutId(1),
            "Todo app",
            &THEMES[0],
            &FONTS[0],
            VariantKind::Hero,
            Utc::now(),
        )
    }

    #[test]
    fn test_new_layout_title_and_description() {
        let layout = sample();
        assert_eq!(layout.title, "Todo app — Hero");
        assert_eq!(layout.description, VariantKind::Hero.description());
        assert!(layout.markup.contains("Todo app"));
    }

    #[test]
    fn test_set_font_recomposes_keeps_id() {
        let mut layout = sample();
        let before = layout.markup.clone();
        layout.set_font(&FONTS[2]);
        assert_eq!(layout.id, LayoutId(1));
        assert_ne!(layout.markup, before);
        assert!(layout.markup.contains(FONTS[2].family));
        assert_eq!(layout.title, "Todo app — Hero");
    }

    #[test]
    fn test_restyle_updates_title() {
        let mut layout = sample();
        layout.restyle(&THEMES[3], &FONTS[4], VariantKind::Pricing);
        assert_eq!(layout.title, "Todo app — Pricing");
        assert_eq!(layout.description, VariantKind::Pricing.description());
        assert_eq!(layout.id, LayoutId(1));
    }

    #[test]
    fn test_from_position() {
        assert_eq!(LayoutId::from_position(0), LayoutId(1));
        assert_eq!(LayoutId::from_position(4).to_string(), "5");
    }
}
