//! Candidate validation.
//!
//! RECEIVED → NAME-RESOLVED → ROLE-CHECKED → ACCEPTED | REJECTED.
//! Every proposed name must resolve to exactly one distinct wardrobe item,
//! the resolved set must dress both the upper and the lower body, and no two
//! garments may compete for the same layer.

use std::collections::HashSet;

use crate::database::models::WardrobeItem;
use crate::services::stylist::analysis::garment::{
    classify_item, top_family, GarmentRole, TopFamily,
};
use crate::services::stylist::analysis::scoring::clamp_confidence;
use crate::services::stylist::models::types::{
    MatchStrategy, RawOutfit, RejectReason, ResolvedItem, ValidationReport, ValidationState,
};
use crate::services::stylist::pipeline::matcher::resolve_name;
use crate::types::errors::MIN_WARDROBE_ITEMS;

/// Confidence assumed when the model omits one.
pub const DEFAULT_AI_CONFIDENCE: f64 = 7.0;

/// A proposal that passed validation, with its items in proposal order.
#[derive(Debug, Clone)]
pub struct AcceptedOutfit {
    pub raw: RawOutfit,
    pub items: Vec<WardrobeItem>,
    pub confidence: u8,
    pub report: ValidationReport,
}

/// Use `item_ids` when every id exists in the wardrobe and none repeats.
fn resolve_by_ids(ids: &[String], wardrobe: &[WardrobeItem]) -> Option<Vec<ResolvedItem>> {
    if ids.is_empty() {
        return None;
    }

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        let item = wardrobe.iter().find(|item| item.id == *id)?;
        if !seen.insert(item.id.as_str()) {
            return None;
        }
        resolved.push(ResolvedItem {
            requested: id.clone(),
            item_id: item.id.clone(),
            strategy: MatchStrategy::ItemId,
        });
    }
    Some(resolved)
}

fn resolve_by_names(raw: &RawOutfit, wardrobe: &[WardrobeItem], report: &mut ValidationReport) {
    for name in raw.items.iter().filter(|name| !name.trim().is_empty()) {
        let Some((item, strategy)) = resolve_name(name, wardrobe) else {
            report.reasons.push(RejectReason::UnresolvedName { name: name.clone() });
            continue;
        };

        if report.resolved.iter().any(|r| r.item_id == item.id) {
            report.reasons.push(RejectReason::DuplicateItem { name: name.clone() });
            continue;
        }

        report.resolved.push(ResolvedItem {
            requested: name.clone(),
            item_id: item.id.clone(),
            strategy,
        });
    }
}

/// Role and layer checks over resolved items.
pub fn check_roles(items: &[&WardrobeItem]) -> Vec<RejectReason> {
    let mut reasons = Vec::new();

    if items.len() < MIN_WARDROBE_ITEMS {
        reasons.push(RejectReason::TooFewItems { count: items.len() });
    }

    let roles: Vec<GarmentRole> = items.iter().map(|item| classify_item(item)).collect();
    if !roles.iter().any(|role| role.covers_top()) {
        reasons.push(RejectReason::MissingTop);
    }
    if !roles.iter().any(|role| role.covers_bottom()) {
        reasons.push(RejectReason::MissingBottom);
    }

    let mut tshirt: Option<&str> = None;
    let mut sweater: Option<&str> = None;
    let mut shirts = 0usize;
    for item in items {
        match top_family(item) {
            Some(TopFamily::TShirt) => {
                tshirt.get_or_insert(item.name.as_str());
            }
            Some(TopFamily::Sweater) => {
                sweater.get_or_insert(item.name.as_str());
            }
            Some(TopFamily::Shirt) => shirts += 1,
            None => {}
        }
    }
    if let (Some(tshirt), Some(sweater)) = (tshirt, sweater) {
        reasons.push(RejectReason::ConflictingTopLayers {
            tshirt: tshirt.to_string(),
            sweater: sweater.to_string(),
        });
    }
    if shirts > 1 {
        reasons.push(RejectReason::MultipleShirts { count: shirts });
    }

    let outer = roles.iter().filter(|role| **role == GarmentRole::Outerwear).count();
    if outer > 1 {
        reasons.push(RejectReason::MultipleOuterLayers { count: outer });
    }

    reasons
}

/// Run one proposal through the validator state machine.
pub fn validate_candidate(raw: &RawOutfit, wardrobe: &[WardrobeItem]) -> ValidationReport {
    let mut report = ValidationReport::new();

    match raw
        .item_ids
        .as_deref()
        .and_then(|ids| resolve_by_ids(ids, wardrobe))
    {
        Some(resolved) => report.resolved = resolved,
        None => resolve_by_names(raw, wardrobe, &mut report),
    }

    if !report.reasons.is_empty() {
        report.state = ValidationState::Rejected;
        return report;
    }
    report.state = ValidationState::NameResolved;

    let items: Vec<&WardrobeItem> = report
        .resolved
        .iter()
        .filter_map(|r| wardrobe.iter().find(|item| item.id == r.item_id))
        .collect();
    report.reasons = check_roles(&items);
    report.state = ValidationState::RoleChecked;

    report.state = if report.reasons.is_empty() {
        ValidationState::Accepted
    } else {
        ValidationState::Rejected
    };
    report
}

/// Ids the pipeline assigns to its own outfits; a proposal may not claim one.
const RESERVED_ID_PREFIX: &str = "fallback-";

/// Validate every proposal, keeping accepted ones in their original order.
///
/// A proposal repeating the item set of an earlier accepted one is dropped.
/// A repeated or reserved proposal id is cleared so the formatter derives a
/// fresh one from the items.
pub fn validate_all(raws: &[RawOutfit], wardrobe: &[WardrobeItem]) -> Vec<AcceptedOutfit> {
    let mut accepted = Vec::new();
    let mut seen_sets: HashSet<Vec<String>> = HashSet::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for (idx, raw) in raws.iter().enumerate() {
        let report = validate_candidate(raw, wardrobe);
        if !report.is_accepted() {
            log::debug!(
                "Rejected proposal #{} '{}': {}",
                idx,
                raw.name,
                report.reason_strings().join("; ")
            );
            continue;
        }

        let items: Vec<WardrobeItem> = report
            .resolved
            .iter()
            .filter_map(|r| wardrobe.iter().find(|item| item.id == r.item_id))
            .cloned()
            .collect();

        let mut item_set: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
        item_set.sort();
        if !seen_sets.insert(item_set) {
            log::debug!("Dropped proposal #{} '{}': repeats an earlier outfit", idx, raw.name);
            continue;
        }

        let mut raw = raw.clone();
        if let Some(id) = raw.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            if id.starts_with(RESERVED_ID_PREFIX) || !seen_ids.insert(id.to_string()) {
                log::debug!("Proposal #{} reuses id '{}', assigning a new one", idx, id);
                raw.id = None;
            }
        }

        let confidence = clamp_confidence(raw.confidence.unwrap_or(DEFAULT_AI_CONFIDENCE));
        accepted.push(AcceptedOutfit {
            raw,
            items,
            confidence,
            report,
        });
    }

    log::info!("Validator accepted {}/{} proposals", accepted.len(), raws.len());
    accepted
}

#[cfg(test)]
#[path = "../tests/pipeline/validator_tests.rs"]
mod tests;
