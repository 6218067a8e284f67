//! Typeface descriptors.

use serde::Serialize;

/// A named typeface with its CSS family declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    pub name: &'static str,
    /// Value for a `font-family` declaration, including fallbacks
    pub family: &'static str,
    /// Stylesheet URL for web fonts; `None` for system stacks
    pub asset_url: Option<&'static str>,
}

/// Built-in font catalog.
pub static FONTS: [Font; 8] = [
    Font {
        name: "Inter",
        family: "'Inter', system-ui, sans-serif",
        asset_url: Some("https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800"),
    },
    Font {
        name: "Playfair Display",
        family: "'Playfair Display', Georgia, serif",
        asset_url: Some("https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700"),
    },
    Font {
        name: "JetBrains Mono",
        family: "'JetBrains Mono', ui-monospace, monospace",
        asset_url: Some("https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;700"),
    },
    Font {
        name: "Poppins",
        family: "'Poppins', 'Helvetica Neue', sans-serif",
        asset_url: Some("https://fonts.googleapis.com/css2?family=Poppins:wght@400;600"),
    },
    Font {
        name: "Merriweather",
        family: "'Merriweather', Georgia, serif",
        asset_url: Some("https://fonts.googleapis.com/css2?family=Merriweather:wght@400;700"),
    },
    Font {
        name: "Space Grotesk",
        family: "'Space Grotesk', system-ui, sans-serif",
        asset_url: Some("https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;700"),
    },
    Font {
        name: "Lora",
        family: "'Lora', 'Times New Roman', serif",
        asset_url: Some("https://fonts.googleapis.com/css2?family=Lora:wght@400;700"),
    },
    Font {
        name: "System",
        family: "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
        asset_url: None,
    },
];
