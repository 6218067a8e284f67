//! Static catalogs of styling primitives.
//!
//! Provides:
//! - [`Theme`] color palettes for generated layouts
//! - [`Font`] typeface descriptors
//! - [`VariantKind`] structural archetypes
//! - [`AppThemeKind`] chrome themes for the workspace itself
//!
//! A [`Catalog`] bundles the three layout tables so the factory and the
//! workspace can be driven by a reduced set in tests.

mod app_theme;
mod font;
mod theme;
mod variant;

pub use app_theme::{AppTheme, AppThemeKind};
pub use font::{Font, FONTS};
pub use theme::{Theme, THEMES};
pub use variant::{VariantKind, VARIANTS};

/// The selectable themes, fonts and variants.
///
/// Every table must be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub themes: &'static [Theme],
    pub fonts: &'static [Font],
    pub variants: &'static [VariantKind],
}

impl Catalog {
    /// The full built-in catalog.
    pub fn builtin() -> Self {
        Self {
            themes: &THEMES,
            fonts: &FONTS,
            variants: &VARIANTS,
        }
    }

    /// Theme following `current` in catalog order, wrapping around.
    ///
    /// A theme not in the catalog cycles to the first entry.
    pub fn next_theme(&self, current: &Theme) -> &'static Theme {
        let index = self
            .themes
            .iter()
            .position(|t| t.name == current.name)
            .map_or(0, |i| (i + 1) % self.themes.len());
        &self.themes[index]
    }

    /// Font following `current` in catalog order, wrapping around.
    pub fn next_font(&self, current: &Font) -> &'static Font {
        let index = self
            .fonts
            .iter()
            .position(|f| f.name == current.name)
            .map_or(0, |i| (i + 1) % self.fonts.len());
        &self.fonts[index]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
