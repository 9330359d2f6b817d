//! Calculation data types.

use obra_shared::types::{BudgetId, LineItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::budget::Budget;

/// Configuration for a calculation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// Profit margin in percent, applied over cost plus indirect.
    pub profit_margin: Decimal,
    /// Indirect cost rate in percent of subtotal. Supplied by the
    /// cost-settings schedule; the calculator only multiplies it.
    pub indirect_rate: Decimal,
}

impl CalculationConfig {
    /// Creates a config from explicit values.
    #[must_use]
    pub const fn new(profit_margin: Decimal, indirect_rate: Decimal) -> Self {
        Self {
            profit_margin,
            indirect_rate,
        }
    }

    /// Creates a config using the budget's own configured margin.
    #[must_use]
    pub const fn for_budget(budget: &Budget, indirect_rate: Decimal) -> Self {
        Self {
            profit_margin: budget.profit_margin,
            indirect_rate,
        }
    }
}

/// What-if overrides for a simulation pass. Never written back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationOverrides {
    /// Margin override; falls back to the budget's configured margin.
    pub profit_margin: Option<Decimal>,
    /// Per-item performance multipliers. A missing key means the item's own
    /// rate applies; ids not present in the budget are ignored.
    pub performance_adjustments: HashMap<LineItemId, Decimal>,
}

impl SimulationOverrides {
    /// Overrides only the profit margin.
    #[must_use]
    pub fn with_margin(margin: Decimal) -> Self {
        Self {
            profit_margin: Some(margin),
            performance_adjustments: HashMap::new(),
        }
    }
}

/// Calculation detail for a single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedItem {
    /// Line item ID.
    pub id: LineItemId,
    /// Price book code, if any.
    pub code: Option<String>,
    /// Description of the work.
    pub description: String,
    /// Unit of measure.
    pub unit: Option<String>,
    /// Nominal quantity as entered.
    pub quantity: Decimal,
    /// Quantity after applying the effective performance rate.
    pub effective_quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Performance rate used in this pass (item's own, or the override).
    pub performance_rate: Decimal,
    /// Labor share of the item total.
    pub labor_cost: Decimal,
    /// Material share of the item total.
    pub material_cost: Decimal,
    /// Equipment share of the item total.
    pub equipment_cost: Decimal,
    /// Item total: `effective_quantity * unit_price`.
    pub total_price: Decimal,
}

/// Derived cost breakdown. Never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total labor cost across all items.
    pub labor_cost: Decimal,
    /// Total material cost across all items.
    pub material_cost: Decimal,
    /// Total equipment cost across all items.
    pub equipment_cost: Decimal,
    /// Indirect cost over the subtotal.
    pub indirect_cost: Decimal,
    /// Profit amount over cost plus indirect.
    pub profit_amount: Decimal,
    /// Profit margin used, in percent.
    pub profit_margin: Decimal,
}

/// Result of a calculation or simulation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Budget the pass ran over.
    pub budget_id: BudgetId,
    /// Sum of all item totals.
    pub subtotal: Decimal,
    /// Profit amount.
    pub profit_amount: Decimal,
    /// Client-facing total: `subtotal + indirect + profit`.
    pub total_amount: Decimal,
    /// Category breakdown.
    pub cost_breakdown: CostBreakdown,
    /// Number of line items processed.
    pub items_calculated: usize,
    /// Per-item detail rows.
    pub items: Vec<CalculatedItem>,
    /// Whether this result was served from the simulation cache.
    #[serde(default)]
    pub cached: bool,
}
