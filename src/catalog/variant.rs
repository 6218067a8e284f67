//! Structural archetypes for generated layouts.

use serde::Serialize;

/// The shape of a layout's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Hero,
    Cards,
    Minimal,
    Dashboard,
    Glass,
    Pricing,
}

/// Built-in variant catalog.
pub static VARIANTS: [VariantKind; 6] = [
    VariantKind::Hero,
    VariantKind::Cards,
    VariantKind::Minimal,
    VariantKind::Dashboard,
    VariantKind::Glass,
    VariantKind::Pricing,
];

impl VariantKind {
    /// Lowercase identifier, e.g. `"hero"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Cards => "cards",
            Self::Minimal => "minimal",
            Self::Dashboard => "dashboard",
            Self::Glass => "glass",
            Self::Pricing => "pricing",
        }
    }

    /// Capitalized name used in layout titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Cards => "Cards",
            Self::Minimal => "Minimal",
            Self::Dashboard => "Dashboard",
            Self::Glass => "Glass",
            Self::Pricing => "Pricing",
        }
    }

    /// Static description copied into every layout of this variant.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hero => "Full-width hero banner with a bold headline and a primary call to action",
            Self::Cards => "Feature grid of three cards highlighting the core benefits",
            Self::Minimal => "Minimal centered layout with a single focused call to action",
            Self::Dashboard => "Analytics dashboard with stat tiles and a recent activity panel",
            Self::Glass => "Translucent glass panel floating over a soft gradient backdrop",
            Self::Pricing => "Pricing comparison with three tiers and a highlighted plan",
        }
    }

    /// Parse a variant from its identifier, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        VARIANTS
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_identifiers() {
        for variant in VARIANTS {
            assert_eq!(VariantKind::parse(variant.as_str()), Some(variant));
        }
        assert_eq!(VariantKind::parse(" PRICING "), Some(VariantKind::Pricing));
        assert_eq!(VariantKind::parse("carousel"), None);
    }

    #[test]
    fn test_descriptions_non_empty() {
        assert!(VARIANTS.iter().all(|v| !v.description().is_empty()));
    }
}
