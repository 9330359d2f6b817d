//! Budget calculation engine.

use std::collections::HashMap;

use obra_shared::types::LineItemId;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::CalculationError;
use super::types::{
    CalculatedItem, CalculationConfig, CalculationResult, CostBreakdown, SimulationOverrides,
};
use crate::budget::Budget;

/// Engine for pricing a budget's line items.
///
/// Stateless and pure: takes immutable snapshots, returns immutable value
/// objects, and leaves writing the budget's cached summary fields to the
/// caller via [`Budget::apply_calculation`].
pub struct BudgetCalculator;

impl BudgetCalculator {
    /// Calculates the cost breakdown and totals for a budget.
    ///
    /// An empty budget is valid and yields an all-zero result.
    ///
    /// # Errors
    ///
    /// Returns a `CalculationError` if the config carries a negative margin
    /// or indirect rate, or any line item has a negative quantity, negative
    /// unit price, or non-positive performance rate.
    pub fn calculate(
        budget: &Budget,
        config: &CalculationConfig,
    ) -> Result<CalculationResult, CalculationError> {
        Self::validate_config(config)?;
        Self::validate_items(budget)?;

        let result = Self::run(budget, config, &HashMap::new());
        debug!(
            budget_id = %budget.id,
            items = result.items_calculated,
            total = %result.total_amount,
            "budget calculation completed"
        );
        Ok(result)
    }

    /// Runs a what-if calculation without touching the budget.
    ///
    /// The profit margin defaults to the budget's configured margin unless
    /// overridden; per-item performance multipliers replace the item's own
    /// rate where the id matches and are ignored where it does not. Two
    /// calls with identical inputs produce identical results.
    ///
    /// # Errors
    ///
    /// Same as [`BudgetCalculator::calculate`], plus
    /// `InvalidPerformanceAdjustment` for non-positive multipliers.
    pub fn simulate(
        budget: &Budget,
        indirect_rate: Decimal,
        overrides: &SimulationOverrides,
    ) -> Result<CalculationResult, CalculationError> {
        let config = CalculationConfig {
            profit_margin: overrides.profit_margin.unwrap_or(budget.profit_margin),
            indirect_rate,
        };

        Self::validate_config(&config)?;
        Self::validate_items(budget)?;
        Self::validate_overrides(overrides)?;

        Ok(Self::run(budget, &config, &overrides.performance_adjustments))
    }

    fn validate_config(config: &CalculationConfig) -> Result<(), CalculationError> {
        if config.profit_margin < Decimal::ZERO {
            return Err(CalculationError::NegativeProfitMargin {
                margin: config.profit_margin,
            });
        }

        if config.indirect_rate < Decimal::ZERO {
            return Err(CalculationError::NegativeIndirectRate {
                rate: config.indirect_rate,
            });
        }

        Ok(())
    }

    fn validate_items(budget: &Budget) -> Result<(), CalculationError> {
        for item in &budget.line_items {
            if item.quantity < Decimal::ZERO {
                return Err(CalculationError::NegativeQuantity { item_id: item.id });
            }

            if item.unit_price < Decimal::ZERO {
                return Err(CalculationError::NegativeUnitPrice { item_id: item.id });
            }

            if item.performance_rate <= Decimal::ZERO {
                return Err(CalculationError::NonPositivePerformanceRate { item_id: item.id });
            }
        }

        Ok(())
    }

    fn validate_overrides(overrides: &SimulationOverrides) -> Result<(), CalculationError> {
        for (item_id, multiplier) in &overrides.performance_adjustments {
            if *multiplier <= Decimal::ZERO {
                return Err(CalculationError::InvalidPerformanceAdjustment {
                    item_id: *item_id,
                    multiplier: *multiplier,
                });
            }
        }

        Ok(())
    }

    /// The calculation pass proper. Inputs are validated by this point.
    ///
    /// Exact `Decimal` arithmetic throughout; display rounding belongs to
    /// the caller.
    fn run(
        budget: &Budget,
        config: &CalculationConfig,
        adjustments: &HashMap<LineItemId, Decimal>,
    ) -> CalculationResult {
        let mut subtotal = Decimal::ZERO;
        let mut labor_cost = Decimal::ZERO;
        let mut material_cost = Decimal::ZERO;
        let mut equipment_cost = Decimal::ZERO;
        let mut items = Vec::with_capacity(budget.line_items.len());

        for item in &budget.line_items {
            let rate = adjustments
                .get(&item.id)
                .copied()
                .unwrap_or(item.performance_rate);

            // Performance scales the effective quantity, not the unit price.
            let effective_quantity = item.quantity * rate;
            let item_total = effective_quantity * item.unit_price;

            let labor = item_total * item.split.labor_percentage / Decimal::ONE_HUNDRED;
            let material = item_total * item.split.material_percentage / Decimal::ONE_HUNDRED;
            let equipment = item_total * item.split.equipment_percentage / Decimal::ONE_HUNDRED;

            subtotal += item_total;
            labor_cost += labor;
            material_cost += material;
            equipment_cost += equipment;

            items.push(CalculatedItem {
                id: item.id,
                code: item.code.clone(),
                description: item.description.clone(),
                unit: item.unit.clone(),
                quantity: item.quantity,
                effective_quantity,
                unit_price: item.unit_price,
                performance_rate: rate,
                labor_cost: labor,
                material_cost: material,
                equipment_cost: equipment,
                total_price: item_total,
            });
        }

        let indirect_cost = subtotal * config.indirect_rate / Decimal::ONE_HUNDRED;
        let profit_amount = (subtotal + indirect_cost) * config.profit_margin / Decimal::ONE_HUNDRED;
        let total_amount = subtotal + indirect_cost + profit_amount;

        CalculationResult {
            budget_id: budget.id,
            subtotal,
            profit_amount,
            total_amount,
            cost_breakdown: CostBreakdown {
                labor_cost,
                material_cost,
                equipment_cost,
                indirect_cost,
                profit_amount,
                profit_margin: config.profit_margin,
            },
            items_calculated: items.len(),
            items,
            cached: false,
        }
    }
}
