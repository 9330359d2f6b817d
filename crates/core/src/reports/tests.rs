//! Tests for the reports module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::{chapter_totals, labor_estimate, material_schedule};
use crate::budget::{Budget, CostSplit, LineItem};
use obra_shared::types::{BudgetId, LineItemId, ProjectId};

fn make_item(chapter: Option<&str>, description: &str, quantity: Decimal) -> LineItem {
    LineItem {
        id: LineItemId::new(),
        budget_id: BudgetId::new(),
        chapter: chapter.map(ToString::to_string),
        code: None,
        description: description.to_string(),
        unit: Some("m2".to_string()),
        quantity,
        unit_price: dec!(50),
        performance_rate: dec!(1),
        split: CostSplit::standard(),
        notes: None,
        order_index: 0,
    }
}

fn make_budget(items: Vec<LineItem>) -> Budget {
    let mut budget = Budget::new(ProjectId::new(), "Report Test", dec!(15));
    for item in items {
        budget.add_line_item(item);
    }
    budget
}

proptest! {
    /// Chapter subtotals always reassemble the budget's nominal total.
    #[test]
    fn test_chapter_totals_cover_budget(
        quantities in prop::collection::vec(0i64..10_000, 0..10),
    ) {
        let items = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| {
                let chapter = match i % 3 {
                    0 => Some("Foundations"),
                    1 => Some("Structure"),
                    _ => None,
                };
                make_item(chapter, "Work", Decimal::from(q))
            })
            .collect();
        let budget = make_budget(items);

        let totals = chapter_totals(&budget);

        let nominal: Decimal = budget.line_items.iter().map(LineItem::total_price).sum();
        let reported: Decimal = totals.iter().map(|t| t.subtotal).sum();
        prop_assert_eq!(reported, nominal);

        let counted: usize = totals.iter().map(|t| t.item_count).sum();
        prop_assert_eq!(counted, budget.line_items.len());
    }

    /// Material schedule cost equals the material share of every item.
    #[test]
    fn test_material_schedule_total(
        quantities in prop::collection::vec(0i64..10_000, 0..10),
    ) {
        let items = quantities
            .iter()
            .map(|&q| make_item(None, "Brick wall", Decimal::from(q)))
            .collect();
        let budget = make_budget(items);

        let schedule = material_schedule(&budget);

        let expected: Decimal = budget
            .line_items
            .iter()
            .map(|item| item.total_price() * item.split.material_percentage / Decimal::ONE_HUNDRED)
            .sum();
        prop_assert_eq!(schedule.total_cost, expected);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_chapter_totals_groups_unassigned() {
        let budget = make_budget(vec![
            make_item(Some("Foundations"), "Footing", dec!(10)),
            make_item(None, "Cleanup", dec!(2)),
            make_item(Some("Foundations"), "Slab", dec!(4)),
        ]);

        let totals = chapter_totals(&budget);

        assert_eq!(totals.len(), 2);
        // BTreeMap ordering: "Foundations" before "General".
        assert_eq!(totals[0].chapter, "Foundations");
        assert_eq!(totals[0].item_count, 2);
        assert_eq!(totals[0].subtotal, dec!(700));
        assert_eq!(totals[1].chapter, "General");
        assert_eq!(totals[1].subtotal, dec!(100));
    }

    #[test]
    fn test_material_schedule_groups_by_description_and_unit() {
        let mut other_unit = make_item(None, "Brick wall", dec!(5));
        other_unit.unit = Some("m3".to_string());

        let budget = make_budget(vec![
            make_item(None, "Brick wall", dec!(10)),
            make_item(None, "Brick wall", dec!(6)),
            other_unit,
        ]);

        let schedule = material_schedule(&budget);

        assert_eq!(schedule.total_lines, 2);
        let grouped = schedule
            .requirements
            .iter()
            .find(|r| r.unit.as_deref() == Some("m2"))
            .unwrap();
        assert_eq!(grouped.quantity, dec!(16));
        assert_eq!(grouped.item_count, 2);
    }

    #[test]
    fn test_labor_estimate_hours() {
        let budget = make_budget(vec![make_item(Some("Structure"), "Columns", dec!(10))]);

        // Item total 500, labor 40% = 200; at 20/hour that is 10 hours.
        let estimate = labor_estimate(&budget, dec!(20));

        assert_eq!(estimate.total_labor_cost, dec!(200));
        assert_eq!(estimate.total_estimated_hours, dec!(10));
        assert_eq!(estimate.by_chapter.len(), 1);
        assert_eq!(estimate.by_chapter[0].chapter, "Structure");
        assert_eq!(estimate.by_chapter[0].estimated_hours, dec!(10));
    }

    #[test]
    fn test_labor_estimate_zero_rate_disables_hours() {
        let budget = make_budget(vec![make_item(None, "Columns", dec!(10))]);

        let estimate = labor_estimate(&budget, Decimal::ZERO);

        assert_eq!(estimate.total_labor_cost, dec!(200));
        assert_eq!(estimate.total_estimated_hours, Decimal::ZERO);
    }

    #[test]
    fn test_empty_budget_reports() {
        let budget = make_budget(vec![]);

        assert!(chapter_totals(&budget).is_empty());

        let schedule = material_schedule(&budget);
        assert_eq!(schedule.total_cost, Decimal::ZERO);
        assert_eq!(schedule.total_lines, 0);

        let estimate = labor_estimate(&budget, dec!(20));
        assert_eq!(estimate.total_labor_cost, Decimal::ZERO);
        assert!(estimate.by_chapter.is_empty());
    }
}
