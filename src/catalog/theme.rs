//! Color themes applied to generated layouts.

use serde::Serialize;

/// A named five-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Display name, also the theme's identity within the catalog
    pub name: &'static str,
    /// Page background
    pub background: &'static str,
    /// Border and divider color
    pub border: &'static str,
    /// Primary text color
    pub text: &'static str,
    /// Accent color for buttons and highlights
    pub accent: &'static str,
    /// Background for cards, tiles and panels
    pub card_background: &'static str,
}

/// Built-in theme catalog.
pub static THEMES: [Theme; 10] = [
    Theme {
        name: "Ocean",
        background: "#eff6ff",
        border: "#bfdbfe",
        text: "#1e3a8a",
        accent: "#2563eb",
        card_background: "#ffffff",
    },
    Theme {
        name: "Sunset",
        background: "#fff7ed",
        border: "#fed7aa",
        text: "#7c2d12",
        accent: "#ea580c",
        card_background: "#ffffff",
    },
    Theme {
        name: "Forest",
        background: "#f0fdf4",
        border: "#bbf7d0",
        text: "#14532d",
        accent: "#16a34a",
        card_background: "#ffffff",
    },
    Theme {
        name: "Midnight",
        background: "#0f172a",
        border: "#334155",
        text: "#e2e8f0",
        accent: "#818cf8",
        card_background: "#1e293b",
    },
    Theme {
        name: "Rose",
        background: "#fff1f2",
        border: "#fecdd3",
        text: "#881337",
        accent: "#e11d48",
        card_background: "#ffffff",
    },
    Theme {
        name: "Slate",
        background: "#f8fafc",
        border: "#cbd5e1",
        text: "#0f172a",
        accent: "#475569",
        card_background: "#ffffff",
    },
    Theme {
        name: "Amber",
        background: "#fffbeb",
        border: "#fde68a",
        text: "#78350f",
        accent: "#d97706",
        card_background: "#ffffff",
    },
    Theme {
        name: "Lavender",
        background: "#faf5ff",
        border: "#e9d5ff",
        text: "#581c87",
        accent: "#9333ea",
        card_background: "#ffffff",
    },
    Theme {
        name: "Mint",
        background: "#f0fdfa",
        border: "#99f6e4",
        text: "#134e4a",
        accent: "#0d9488",
        card_background: "#ffffff",
    },
    Theme {
        name: "Carbon",
        background: "#18181b",
        border: "#3f3f46",
        text: "#fafafa",
        accent: "#facc15",
        card_background: "#27272a",
    },
];

impl Theme {
    /// All five color roles, in declaration order.
    pub fn roles(&self) -> [&'static str; 5] {
        [
            self.background,
            self.border,
            self.text,
            self.accent,
            self.card_background,
        ]
    }
}
