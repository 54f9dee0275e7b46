use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{seq::IndexedRandom, Rng};
use uuid::Uuid;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        ClothingItem, ClothingStyle, ClothingType, OutfitPreview, ScoredClothingItem,
        StyleWeights, Weather,
    },
    scoring,
    services::providers::WardrobeStore,
};

/// How many top-scored candidates a slot draw chooses among
const SLOT_POOL_SIZE: usize = 3;

/// Upper bound on accessories per outfit
const MAX_ACCESSORIES: usize = 3;

/// Below this temperature (°C) an extra layer is considered
const LAYER_TEMP_THRESHOLD: f64 = 20.0;

/// Above this rain intensity an extra layer is considered
const LAYER_RAIN_THRESHOLD: f64 = 1.0;

/// Per-request generation options
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Style profile; falls back to the configured default when absent
    pub style: Option<ClothingStyle>,
}

/// Assembles outfits from a user's wardrobe
///
/// Scores every item against the weather, the wear history and a randomly
/// anchored base garment, then greedily fills the outfit slots. All
/// randomness flows through the caller-supplied `rng`, so a seeded generator
/// reproduces the same outfit.
pub struct OutfitGenerator {
    wardrobe: Arc<dyn WardrobeStore>,
    config: Config,
}

impl OutfitGenerator {
    pub fn new(wardrobe: Arc<dyn WardrobeStore>, config: Config) -> Self {
        Self { wardrobe, config }
    }

    /// Generates a single outfit preview
    ///
    /// Fails with [`AppError::NotEnoughItems`] when the wardrobe is empty.
    /// Unavailable weather is not an error: weather-dependent scoring terms
    /// and the extra-layer slot are skipped.
    pub async fn generate_outfit<R: Rng + ?Sized>(
        &self,
        user_id: Uuid,
        weather: &Weather,
        options: &GenerateOptions,
        rng: &mut R,
    ) -> AppResult<OutfitPreview> {
        let start = Instant::now();
        let style = options.style.unwrap_or(self.config.default_style);

        let items = self.wardrobe.items_for_user(user_id).await?;
        if items.is_empty() {
            return Err(AppError::NotEnoughItems(format!(
                "no clothing items found for user {}",
                user_id
            )));
        }

        let wardrobe_size = items.len();
        let preview = assemble_outfit(items, weather, style, Utc::now(), rng);

        tracing::info!(
            user_id = %user_id,
            wardrobe_size,
            outfit_size = preview.items.len(),
            style = %style,
            weather_available = weather.reading().is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Outfit assembled"
        );

        Ok(preview)
    }

    /// Generates `count` independent outfit previews
    ///
    /// Each preview repeats the full generation pass; duplicates across the
    /// batch are possible and not deduplicated. Any single failure aborts
    /// the batch.
    pub async fn generate_outfits<R: Rng + ?Sized>(
        &self,
        user_id: Uuid,
        weather: &Weather,
        count: usize,
        options: &GenerateOptions,
        rng: &mut R,
    ) -> AppResult<Vec<OutfitPreview>> {
        if count == 0 || count > self.config.max_previews {
            return Err(AppError::InvalidInput(format!(
                "preview count must be between 1 and {}, got {}",
                self.config.max_previews, count
            )));
        }

        let mut previews = Vec::with_capacity(count);
        for _ in 0..count {
            previews.push(self.generate_outfit(user_id, weather, options, rng).await?);
        }

        tracing::debug!(
            user_id = %user_id,
            count = previews.len(),
            "Outfit batch generated"
        );

        Ok(previews)
    }
}

/// Scores the wardrobe and greedily fills the outfit slots
fn assemble_outfit<R: Rng + ?Sized>(
    items: Vec<ClothingItem>,
    weather: &Weather,
    style: ClothingStyle,
    now: DateTime<Utc>,
    rng: &mut R,
) -> OutfitPreview {
    let weights = style.weights();

    let mut scored: Vec<ScoredClothingItem> =
        items.into_iter().map(ScoredClothingItem::new).collect();

    let anchor = pick_anchor(&scored, rng);
    score_items(&mut scored, anchor.as_ref(), weather, &weights, now, rng);

    // Descending by score; the sort is stable, so ties keep wardrobe order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut outfit: Vec<ScoredClothingItem> = Vec::new();

    if let Some(anchor) = &anchor {
        if let Some(entry) = scored.iter().find(|entry| entry.item.id == anchor.id) {
            outfit.push(entry.clone());
        }
        // A dress covers the bottom slot on its own.
        if anchor.kind == ClothingType::Shirt {
            if let Some(bottom) = pick_from_top_pool(&scored, ClothingType::Pants, rng) {
                outfit.push(bottom);
            }
        }
    }

    if let Some(shoes) = pick_from_top_pool(&scored, ClothingType::Shoes, rng) {
        outfit.push(shoes);
    }

    outfit.extend(pick_accessories(&scored, rng));

    if let Some(reading) = weather.reading() {
        if reading.temp < LAYER_TEMP_THRESHOLD || reading.rain > LAYER_RAIN_THRESHOLD {
            let layer = pick_from_top_pool(&scored, ClothingType::Jacket, rng)
                .or_else(|| pick_from_top_pool(&scored, ClothingType::Sweater, rng));
            if let Some(layer) = layer {
                outfit.push(layer);
            }
        }
    }

    OutfitPreview { items: outfit }
}

/// Uniformly picks a shirt or dress to anchor color scoring, if any exists
fn pick_anchor<R: Rng + ?Sized>(
    scored: &[ScoredClothingItem],
    rng: &mut R,
) -> Option<ClothingItem> {
    let candidates: Vec<&ScoredClothingItem> = scored
        .iter()
        .filter(|entry| {
            matches!(
                entry.item.kind,
                ClothingType::Shirt | ClothingType::Dress
            )
        })
        .collect();
    candidates.choose(rng).map(|entry| entry.item.clone())
}

/// One scoring pass over every item
///
/// Recency and weather factors carry the style weights; the four
/// color-harmony terms against the anchor are summed unweighted.
fn score_items<R: Rng + ?Sized>(
    scored: &mut [ScoredClothingItem],
    anchor: Option<&ClothingItem>,
    weather: &Weather,
    weights: &StyleWeights,
    now: DateTime<Utc>,
    rng: &mut R,
) {
    for entry in scored.iter_mut() {
        entry.score += scoring::last_worn_score(&entry.item, now) * weights.last_worn;

        if let Some(anchor) = anchor {
            entry.score += scoring::monochrome_score(anchor, &entry.item)
                + scoring::analogous_score(anchor, &entry.item)
                + scoring::complementary_score(anchor, &entry.item, rng)
                + scoring::triadic_score(anchor, &entry.item);
        }

        if let Some(reading) = weather.reading() {
            entry.score += scoring::color_for_uv_score(&entry.item, reading) * weights.uv
                + scoring::temp_score(&entry.item, reading) * weights.temp
                + scoring::rain_score(&entry.item, reading) * weights.rain;
        }
    }
}

/// Uniform pick among the top-scored candidates of one garment category
///
/// `scored` must already be sorted descending; the pool is the first
/// [`SLOT_POOL_SIZE`] matches.
fn pick_from_top_pool<R: Rng + ?Sized>(
    scored: &[ScoredClothingItem],
    kind: ClothingType,
    rng: &mut R,
) -> Option<ScoredClothingItem> {
    let pool: Vec<&ScoredClothingItem> = scored
        .iter()
        .filter(|entry| entry.item.kind == kind)
        .take(SLOT_POOL_SIZE)
        .collect();
    pool.choose(rng).map(|entry| (*entry).clone())
}

/// Score-blind accessory draw
///
/// Picks a uniform random count (0 to three, capped by availability), then
/// samples that many accessories without replacement from the whole pool,
/// ignoring scores entirely.
fn pick_accessories<R: Rng + ?Sized>(
    scored: &[ScoredClothingItem],
    rng: &mut R,
) -> Vec<ScoredClothingItem> {
    let pool: Vec<&ScoredClothingItem> = scored
        .iter()
        .filter(|entry| entry.item.kind == ClothingType::Accessory)
        .collect();
    if pool.is_empty() {
        return Vec::new();
    }

    let count = rng.random_range(0..=pool.len().min(MAX_ACCESSORIES));
    pool.choose_multiple(rng, count)
        .map(|entry| (*entry).clone())
        .collect()
}
