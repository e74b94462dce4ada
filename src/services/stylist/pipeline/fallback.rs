//! Deterministic outfit assembly used when the external model is
//! unavailable or none of its proposals survive validation.
//!
//! Three strategies take turns by attempt index (color harmony, pattern
//! mixing, contrast balance). Each anchors on a top or dress, fills the
//! missing body slot, then adds footwear, an outer layer and an accessory
//! when they fit the strategy's rule.

use std::collections::HashSet;

use crate::database::models::WardrobeItem;
use crate::services::stylist::analysis::color::{classify_harmony, item_color};
use crate::services::stylist::analysis::garment::{classify_item, GarmentRole};
use crate::services::stylist::analysis::pattern::{evaluate_mix, item_pattern};
use crate::services::stylist::analysis::scoring::{evaluate_outfit, CONFIDENCE_CEILING};
use crate::services::stylist::models::types::OutfitSource;
use crate::types::errors::MIN_WARDROBE_ITEMS;

/// Minimum pairwise harmony score for the color strategy.
pub const MIN_HARMONY_SCORE: u8 = 7;
/// Minimum mixing confidence between two patterned items.
pub const MIN_MIX_CONFIDENCE: u8 = 7;
/// Patterned items allowed in one pattern-mix outfit.
pub const MAX_PATTERNED_ITEMS: usize = 2;
/// A strategy outfit with fewer items is discarded.
pub const MIN_STRATEGY_ITEMS: usize = 3;
/// Items taken by the last-resort outfit.
pub const LAST_RESORT_ITEMS: usize = 4;

/// Wardrobe split by garment role.
#[derive(Debug, Default)]
pub struct WardrobePartition<'a> {
    pub tops: Vec<&'a WardrobeItem>,
    pub bottoms: Vec<&'a WardrobeItem>,
    pub outerwear: Vec<&'a WardrobeItem>,
    pub footwear: Vec<&'a WardrobeItem>,
    pub dresses: Vec<&'a WardrobeItem>,
    pub accessories: Vec<&'a WardrobeItem>,
}

impl<'a> WardrobePartition<'a> {
    pub fn new(wardrobe: &'a [WardrobeItem]) -> Self {
        let mut partition = Self::default();
        for item in wardrobe {
            match classify_item(item) {
                GarmentRole::Top => partition.tops.push(item),
                GarmentRole::Bottom => partition.bottoms.push(item),
                GarmentRole::Outerwear => partition.outerwear.push(item),
                GarmentRole::Footwear => partition.footwear.push(item),
                GarmentRole::FullBody => partition.dresses.push(item),
                GarmentRole::Accessory => partition.accessories.push(item),
                GarmentRole::Other => {
                    log::debug!("Item '{}' has no garment role, skipped by fallback", item.name)
                }
            }
        }
        partition
    }

    /// Tops followed by dresses: everything that can anchor an outfit.
    fn anchors(&self) -> Vec<&'a WardrobeItem> {
        self.tops.iter().chain(self.dresses.iter()).copied().collect()
    }
}

/// One outfit assembled without the external model.
#[derive(Debug, Clone)]
pub struct FallbackOutfit {
    /// Position among fallback outfits of this invocation.
    pub index: usize,
    pub source: OutfitSource,
    pub items: Vec<WardrobeItem>,
    pub confidence: u8,
}

type StrategyFn = for<'a> fn(&WardrobePartition<'a>, usize) -> Option<Vec<&'a WardrobeItem>>;

/// Round-robin order of the strategies.
const STRATEGIES: &[(OutfitSource, StrategyFn)] = &[
    (OutfitSource::ColorHarmony, color_harmony_outfit),
    (OutfitSource::PatternMix, pattern_mix_outfit),
    (OutfitSource::ContrastBalance, contrast_outfit),
];

/// Item at `variant` in a rotated view of `pool`.
fn rotated<'a, 'p>(
    pool: &'p [&'a WardrobeItem],
    variant: usize,
) -> impl Iterator<Item = &'a WardrobeItem> + 'p {
    let len = pool.len();
    (0..len).map(move |offset| pool[(variant + offset) % len])
}

/// Add one footwear, one outer layer and one accessory, each only when
/// accepted by `fits`.
fn add_extras<'a>(
    partition: &WardrobePartition<'a>,
    chosen: &mut Vec<&'a WardrobeItem>,
    variant: usize,
    fits: &impl Fn(&[&'a WardrobeItem], &'a WardrobeItem) -> bool,
) {
    for pool in [&partition.footwear, &partition.outerwear, &partition.accessories] {
        if let Some(extra) = rotated(pool, variant).find(|extra| fits(chosen.as_slice(), *extra)) {
            chosen.push(extra);
        }
    }
}

/// Complete an anchor with a bottom (unless it is a dress) and extras.
fn assemble<'a>(
    partition: &WardrobePartition<'a>,
    anchor: &'a WardrobeItem,
    variant: usize,
    fits: impl Fn(&[&'a WardrobeItem], &'a WardrobeItem) -> bool,
) -> Option<Vec<&'a WardrobeItem>> {
    let mut chosen = vec![anchor];

    if classify_item(anchor) != GarmentRole::FullBody {
        let bottom = rotated(&partition.bottoms, variant).find(|b| fits(chosen.as_slice(), *b))?;
        chosen.push(bottom);
    }

    add_extras(partition, &mut chosen, variant, &fits);
    Some(chosen)
}

/// Every pair harmonizes at [`MIN_HARMONY_SCORE`] or better.
fn color_harmony_outfit<'a>(
    partition: &WardrobePartition<'a>,
    variant: usize,
) -> Option<Vec<&'a WardrobeItem>> {
    let anchors = partition.anchors();
    let anchor = rotated(&anchors, variant).next()?;

    assemble(partition, anchor, variant, |chosen, candidate| {
        let color = item_color(candidate);
        chosen
            .iter()
            .all(|item| classify_harmony(&item_color(item), &color).score >= MIN_HARMONY_SCORE)
    })
}

/// Solids always fit. A patterned piece fits while the outfit holds fewer
/// than [`MAX_PATTERNED_ITEMS`] patterns and mixes with each of them at
/// [`MIN_MIX_CONFIDENCE`] or better.
fn pattern_fits(chosen: &[&WardrobeItem], candidate: &WardrobeItem) -> bool {
    let pattern = item_pattern(candidate);
    if !pattern.is_patterned() {
        return true;
    }
    let chosen_patterns: Vec<_> = chosen
        .iter()
        .map(|item| item_pattern(item))
        .filter(|p| p.is_patterned())
        .collect();
    chosen_patterns.len() < MAX_PATTERNED_ITEMS
        && chosen_patterns
            .iter()
            .all(|other| evaluate_mix(other, &pattern).confidence >= MIN_MIX_CONFIDENCE)
}

/// Anchored on a patterned top, dress or bottom.
fn pattern_mix_outfit<'a>(
    partition: &WardrobePartition<'a>,
    variant: usize,
) -> Option<Vec<&'a WardrobeItem>> {
    let patterned: Vec<&WardrobeItem> = partition
        .anchors()
        .into_iter()
        .chain(partition.bottoms.iter().copied())
        .filter(|item| item_pattern(item).is_patterned())
        .collect();
    let anchor = rotated(&patterned, variant).next()?;

    if classify_item(anchor) != GarmentRole::Bottom {
        return assemble(partition, anchor, variant, pattern_fits);
    }

    let top = rotated(&partition.tops, variant).find(|top| pattern_fits(&[anchor], top))?;
    let mut chosen = vec![top, anchor];
    add_extras(partition, &mut chosen, variant, &pattern_fits);
    Some(chosen)
}

/// A light piece (lightness above 60) set against a dark one (below 40).
fn contrast_outfit<'a>(
    partition: &WardrobePartition<'a>,
    variant: usize,
) -> Option<Vec<&'a WardrobeItem>> {
    let anchors = partition.anchors();
    let anchor = rotated(&anchors, variant)
        .find(|item| {
            let color = item_color(item);
            color.is_light() || color.is_dark()
        })?;

    let outfit = assemble(partition, anchor, variant, |chosen, candidate| {
        let color = item_color(candidate);
        let has_light = chosen.iter().any(|item| item_color(item).is_light());
        let has_dark = chosen.iter().any(|item| item_color(item).is_dark());
        // Until both ends are present, only the missing end is accepted.
        match (has_light, has_dark) {
            (true, false) => color.is_dark(),
            (false, true) => color.is_light(),
            _ => true,
        }
    })?;

    let balanced = outfit.iter().any(|item| item_color(item).is_light())
        && outfit.iter().any(|item| item_color(item).is_dark());
    balanced.then_some(outfit)
}

fn item_set(items: &[&WardrobeItem]) -> Vec<String> {
    let mut ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
    ids.sort();
    ids
}

fn build_outfit(index: usize, source: OutfitSource, items: &[&WardrobeItem]) -> FallbackOutfit {
    let evaluation = evaluate_outfit(items);
    FallbackOutfit {
        index,
        source,
        items: items.iter().map(|item| (*item).clone()).collect(),
        confidence: evaluation.total.min(CONFIDENCE_CEILING),
    }
}

/// Assemble up to `count` outfits from the wardrobe.
///
/// `taken` lists item sets (sorted ids) already shown to the user; those
/// combinations are skipped. Whenever the wardrobe has at least two items and
/// no strategy succeeds, a single last-resort outfit of the first items is
/// returned.
pub fn generate_fallback(
    wardrobe: &[WardrobeItem],
    count: usize,
    taken: &[Vec<String>],
) -> Vec<FallbackOutfit> {
    let partition = WardrobePartition::new(wardrobe);
    let mut seen: HashSet<Vec<String>> = taken.iter().cloned().collect();
    let mut outfits: Vec<FallbackOutfit> = Vec::new();

    let max_attempts = count * STRATEGIES.len() * 2;
    for attempt in 0..max_attempts {
        if outfits.len() >= count {
            break;
        }

        let (source, strategy) = STRATEGIES[attempt % STRATEGIES.len()];
        let variant = attempt / STRATEGIES.len();
        let Some(items) = strategy(&partition, variant) else {
            log::debug!("Fallback {} found no outfit (variant {})", source, variant);
            continue;
        };

        if items.len() < MIN_STRATEGY_ITEMS {
            log::debug!("Fallback {} outfit has only {} items, discarded", source, items.len());
            continue;
        }
        if !seen.insert(item_set(&items)) {
            continue;
        }

        outfits.push(build_outfit(outfits.len(), source, &items));
    }

    if outfits.is_empty() && count > 0 && wardrobe.len() >= MIN_WARDROBE_ITEMS {
        let items: Vec<&WardrobeItem> = wardrobe.iter().take(LAST_RESORT_ITEMS).collect();
        log::info!("Fallback strategies failed, using first {} wardrobe items", items.len());
        outfits.push(build_outfit(0, OutfitSource::LastResort, &items));
    }

    log::info!("Fallback generator produced {} outfit(s)", outfits.len());
    outfits
}

#[cfg(test)]
#[path = "../tests/pipeline/fallback_tests.rs"]
mod tests;
