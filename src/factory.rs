//! Layout factory.
//!
//! Assembles a batch of visually distinct layouts for one prompt. The theme,
//! font and variant tables are shuffled independently and dealt out by
//! position, so within one batch no two layouts share both theme and variant
//! while the batch fits in the smaller of the two tables.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::{Catalog, Font, Theme, VariantKind};
use crate::layout::{Layout, LayoutId};

/// Fewest layouts a generation may produce.
pub const MIN_BATCH: usize = 2;
/// Most layouts a generation may produce.
pub const MAX_BATCH: usize = 5;

/// Clamp a requested batch size into [`MIN_BATCH`, `MAX_BATCH`].
pub fn clamp_batch_size(count: usize) -> usize {
    count.clamp(MIN_BATCH, MAX_BATCH)
}

/// Builds layout batches from a catalog and a random source.
pub struct LayoutFactory<R = StdRng> {
    catalog: Catalog,
    rng: R,
}

impl LayoutFactory<StdRng> {
    /// Factory over the built-in catalog, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(Catalog::builtin(), StdRng::from_entropy())
    }

    /// Factory with a reproducible random source.
    pub fn seeded(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl Default for LayoutFactory<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LayoutFactory<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build `count` layouts for `prompt`; `count` is clamped to the batch bounds.
    ///
    /// The prompt must be non-blank; callers validate before invoking.
    pub fn make_batch(&mut self, prompt: &str, count: usize) -> Vec<Layout> {
        let count = clamp_batch_size(count);
        let mut themes: Vec<&'static Theme> = self.catalog.themes.iter().collect();
        let mut fonts: Vec<&'static Font> = self.catalog.fonts.iter().collect();
        let mut variants: Vec<VariantKind> = self.catalog.variants.to_vec();
        themes.shuffle(&mut self.rng);
        fonts.shuffle(&mut self.rng);
        variants.shuffle(&mut self.rng);

        let created_at = Utc::now();
        let batch: Vec<Layout> = (0..count)
            .map(|i| {
                Layout::new(
                    LayoutId::from_position(i),
                    prompt,
                    themes[i % themes.len()],
                    fonts[i % fonts.len()],
                    variants[i % variants.len()],
                    created_at,
                )
            })
            .collect();

        debug!(
            count,
            variants = ?batch.iter().map(|l| l.variant.as_str()).collect::<Vec<_>>(),
            "Composed layout batch"
        );
        batch
    }

    /// Pick a theme, font and variant uniformly and independently.
    pub fn random_style(&mut self) -> (&'static Theme, &'static Font, VariantKind) {
        let catalog = self.catalog;
        let theme = &catalog.themes[self.rng.gen_range(0..catalog.themes.len())];
        let font = &catalog.fonts[self.rng.gen_range(0..catalog.fonts.len())];
        let variant = catalog.variants[self.rng.gen_range(0..catalog.variants.len())];
        (theme, font, variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FONTS, THEMES, VARIANTS};
    use std::collections::HashSet;

    #[test]
    fn test_count_invariant() {
        let mut factory = LayoutFactory::seeded(Catalog::builtin(), 7);
        for count in MIN_BATCH..=MAX_BATCH {
            let batch = factory.make_batch("Todo app", count);
            assert_eq!(batch.len(), count);
            let ids: HashSet<_> = batch.iter().map(|l| l.id).collect();
            assert_eq!(ids.len(), count);
        }
    }

    #[test]
    fn test_count_is_clamped() {
        let mut factory = LayoutFactory::seeded(Catalog::builtin(), 1);
        assert_eq!(factory.make_batch("p", 0).len(), MIN_BATCH);
        assert_eq!(factory.make_batch("p", 99).len(), MAX_BATCH);
    }

    #[test]
    fn test_basic_generation_scenario() {
        let mut factory = LayoutFactory::seeded(Catalog::builtin(), 42);
        let batch = factory.make_batch("Todo app", 3);
        assert_eq!(batch.len(), 3);
        let variants: HashSet<_> = batch.iter().map(|l| l.variant).collect();
        assert_eq!(variants.len(), 3);
        for layout in &batch {
            assert!(layout.title.starts_with("Todo app — "));
            assert_eq!(layout.description, layout.variant.description());
            assert_eq!(layout.source_prompt, "Todo app");
        }
    }

    #[test]
    fn test_batch_shares_created_at() {
        let mut factory = LayoutFactory::seeded(Catalog::builtin(), 3);
        let batch = factory.make_batch("p", 5);
        assert!(batch.iter().all(|l| l.created_at == batch[0].created_at));
    }

    #[test]
    fn test_no_repeated_theme_variant_pair() {
        for seed in 0..50 {
            let mut factory = LayoutFactory::seeded(Catalog::builtin(), seed);
            let batch = factory.make_batch("p", MAX_BATCH);
            let pairs: HashSet<_> = batch.iter().map(|l| (l.theme.name, l.variant)).collect();
            assert_eq!(pairs.len(), batch.len(), "seed {} repeated a pair", seed);
        }
    }

    #[test]
    fn test_small_catalog_wraps_by_position() {
        let catalog = Catalog {
            themes: &THEMES[..2],
            fonts: &FONTS[..1],
            variants: &VARIANTS[..2],
        };
        let mut factory = LayoutFactory::seeded(catalog, 9);
        let batch = factory.make_batch("p", 4);
        assert_eq!(batch[0].theme.name, batch[2].theme.name);
        assert_eq!(batch[1].variant, batch[3].variant);
        assert!(batch.iter().all(|l| l.font.name == FONTS[0].name));
    }

    #[test]
    fn test_same_seed_same_composition() {
        let mut a = LayoutFactory::seeded(Catalog::builtin(), 11);
        let mut b = LayoutFactory::seeded(Catalog::builtin(), 11);
        let left: Vec<_> = a.make_batch("p", 3).into_iter().map(|l| l.markup).collect();
        let right: Vec<_> = b.make_batch("p", 3).into_iter().map(|l| l.markup).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_random_style_draws_from_catalog() {
        let catalog = Catalog {
            themes: &THEMES[4..5],
            fonts: &FONTS[2..3],
            variants: &VARIANTS[5..6],
        };
        let mut factory = LayoutFactory::seeded(catalog, 0);
        let (theme, font, variant) = factory.random_style();
        assert_eq!(theme.name, THEMES[4].name);
        assert_eq!(font.name, FONTS[2].name);
        assert_eq!(variant, VARIANTS[5]);
    }
}
