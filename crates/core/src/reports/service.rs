//! Report generation over budget line items.
//!
//! Reports use nominal item totals (`quantity * unit_price`); performance
//! adjustments belong to calculation passes, not to material or labor
//! take-offs.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::types::{
    ChapterLabor, ChapterTotal, LaborEstimate, MaterialRequirement, MaterialSchedule,
};
use crate::budget::Budget;

/// Bucket for items without a chapter.
const DEFAULT_CHAPTER: &str = "General";

/// Totals per chapter, in chapter name order.
#[must_use]
pub fn chapter_totals(budget: &Budget) -> Vec<ChapterTotal> {
    let mut chapters: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();

    for item in &budget.line_items {
        let chapter = item.chapter.as_deref().unwrap_or(DEFAULT_CHAPTER);
        let entry = chapters.entry(chapter).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += item.total_price();
    }

    chapters
        .into_iter()
        .map(|(chapter, (item_count, subtotal))| ChapterTotal {
            chapter: chapter.to_string(),
            item_count,
            subtotal,
        })
        .collect()
}

/// Aggregated material needs, grouped by description and unit.
#[must_use]
pub fn material_schedule(budget: &Budget) -> MaterialSchedule {
    let mut groups: BTreeMap<(&str, Option<&str>), (Decimal, Decimal, usize)> = BTreeMap::new();

    for item in &budget.line_items {
        let material_cost =
            item.total_price() * item.split.material_percentage / Decimal::ONE_HUNDRED;
        let key = (item.description.as_str(), item.unit.as_deref());

        let entry = groups
            .entry(key)
            .or_insert((Decimal::ZERO, Decimal::ZERO, 0));
        entry.0 += item.quantity;
        entry.1 += material_cost;
        entry.2 += 1;
    }

    let requirements: Vec<MaterialRequirement> = groups
        .into_iter()
        .map(
            |((description, unit), (quantity, estimated_cost, item_count))| MaterialRequirement {
                description: description.to_string(),
                unit: unit.map(ToString::to_string),
                quantity,
                estimated_cost,
                item_count,
            },
        )
        .collect();

    let total_cost = requirements.iter().map(|r| r.estimated_cost).sum();
    let total_lines = requirements.len();

    MaterialSchedule {
        requirements,
        total_cost,
        total_lines,
    }
}

/// Labor cost and estimated hours at the given hourly rate.
///
/// A non-positive hourly rate disables the hour estimate; costs are still
/// reported.
#[must_use]
pub fn labor_estimate(budget: &Budget, hourly_rate: Decimal) -> LaborEstimate {
    let mut total_labor_cost = Decimal::ZERO;
    let mut chapters: BTreeMap<&str, Decimal> = BTreeMap::new();

    for item in &budget.line_items {
        let labor_cost = item.total_price() * item.split.labor_percentage / Decimal::ONE_HUNDRED;
        total_labor_cost += labor_cost;

        let chapter = item.chapter.as_deref().unwrap_or(DEFAULT_CHAPTER);
        *chapters.entry(chapter).or_insert(Decimal::ZERO) += labor_cost;
    }

    let hours_for = |cost: Decimal| {
        if hourly_rate > Decimal::ZERO {
            cost / hourly_rate
        } else {
            Decimal::ZERO
        }
    };

    let by_chapter = chapters
        .into_iter()
        .map(|(chapter, labor_cost)| ChapterLabor {
            chapter: chapter.to_string(),
            labor_cost,
            estimated_hours: hours_for(labor_cost),
        })
        .collect();

    LaborEstimate {
        total_labor_cost,
        total_estimated_hours: hours_for(total_labor_cost),
        hourly_rate,
        by_chapter,
    }
}
