//! Data-entry integrity checks for budgets.
//!
//! This is the strict layer: extraction and import produce messy data, and
//! the report here is what a data-entry screen surfaces to the user. The
//! calculator itself stays tolerant of anything that passes its own input
//! validation.

use rust_decimal::Decimal;
use serde::Serialize;

use super::types::Budget;

/// Performance rates above this are outside any plausible crew productivity.
const MAX_NOMINAL_PERFORMANCE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Aggregate statistics over a budget's line items.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStats {
    /// Number of line items.
    pub total_items: usize,
    /// Items with a zero or negative unit price.
    pub items_with_zero_price: usize,
    /// Items with a zero or negative quantity.
    pub items_with_zero_quantity: usize,
    /// Sum of nominal item totals.
    pub total_estimated_value: Decimal,
}

/// Result of a budget integrity check.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetValidationReport {
    /// True when no errors were found (warnings do not affect validity).
    pub is_valid: bool,
    /// Conditions that make the budget unusable.
    pub errors: Vec<String>,
    /// Suspicious but tolerated conditions.
    pub warnings: Vec<String>,
    /// Aggregate statistics.
    pub stats: BudgetStats,
}

/// Checks the integrity of a budget's line items.
///
/// Zero or negative unit prices and empty budgets are errors; zero quantities
/// and out-of-range performance rates are warnings.
#[must_use]
pub fn validate_budget(budget: &Budget) -> BudgetValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut stats = BudgetStats {
        total_items: budget.line_items.len(),
        items_with_zero_price: 0,
        items_with_zero_quantity: 0,
        total_estimated_value: Decimal::ZERO,
    };

    for item in &budget.line_items {
        let label = item.code.as_deref().unwrap_or(&item.description);

        if item.unit_price <= Decimal::ZERO {
            errors.push(format!("Item {label}: invalid unit price"));
            stats.items_with_zero_price += 1;
        }

        if item.quantity <= Decimal::ZERO {
            warnings.push(format!("Item {label}: zero or negative quantity"));
            stats.items_with_zero_quantity += 1;
        }

        if item.performance_rate <= Decimal::ZERO
            || item.performance_rate > MAX_NOMINAL_PERFORMANCE_RATE
        {
            warnings.push(format!("Item {label}: performance rate out of normal range"));
        }

        stats.total_estimated_value += item.total_price();
    }

    if budget.line_items.is_empty() {
        errors.push("Budget contains no line items".to_string());
    }

    if stats.total_estimated_value <= Decimal::ZERO {
        errors.push("Budget total value is zero".to_string());
    }

    BudgetValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        stats,
    }
}
