//! Profit margin scenario analysis.
//!
//! Evaluates a set of what-if margins over one budget, classifying each by
//! risk and break-even point. Scenarios are independent, so they fan out
//! across the rayon pool.

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::engine::BudgetCalculator;
use super::error::CalculationError;
use super::types::{CalculationResult, SimulationOverrides};
use crate::budget::Budget;

/// Risk classification of a profit margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Healthy buffer for cost overruns.
    Low,
    /// Acceptable margin, costs need monitoring.
    Medium,
    /// Tight margin, strict cost control required.
    MediumHigh,
    /// High chance of a loss.
    High,
}

impl RiskLevel {
    /// Classifies a margin in percent.
    #[must_use]
    pub fn for_margin(margin: Decimal) -> Self {
        if margin >= Decimal::new(20, 0) {
            Self::Low
        } else if margin >= Decimal::new(15, 0) {
            Self::Medium
        } else if margin >= Decimal::new(10, 0) {
            Self::MediumHigh
        } else {
            Self::High
        }
    }
}

/// A named what-if profit margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginScenario {
    /// Scenario name.
    pub name: String,
    /// Profit margin in percent.
    pub margin: Decimal,
}

impl MarginScenario {
    /// Creates a scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, margin: Decimal) -> Self {
        Self {
            name: name.into(),
            margin,
        }
    }

    /// The standard scenario set around a budget's configured margin.
    #[must_use]
    pub fn standard_set(budget_margin: Decimal) -> Vec<Self> {
        vec![
            Self::new("Conservative", Decimal::new(10, 0)),
            Self::new("Standard", budget_margin),
            Self::new("Aggressive", Decimal::new(20, 0)),
            Self::new("Premium", Decimal::new(25, 0)),
        ]
    }
}

/// Outcome of one margin scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Margin evaluated, in percent.
    pub margin: Decimal,
    /// Risk classification of the margin.
    pub risk_level: RiskLevel,
    /// Revenue needed to cover cost at this margin.
    pub break_even_point: Decimal,
    /// Full calculation result for the scenario.
    pub result: CalculationResult,
}

/// Fan-out evaluation of margin scenarios over one budget.
pub struct ScenarioAnalysis;

impl ScenarioAnalysis {
    /// Evaluates each scenario as an independent simulation.
    ///
    /// Outcomes are returned in the order the scenarios were supplied.
    ///
    /// # Errors
    ///
    /// Propagates the first `CalculationError` from any scenario.
    pub fn run(
        budget: &Budget,
        indirect_rate: Decimal,
        scenarios: &[MarginScenario],
    ) -> Result<Vec<ScenarioOutcome>, CalculationError> {
        scenarios
            .par_iter()
            .map(|scenario| {
                let overrides = SimulationOverrides::with_margin(scenario.margin);
                let result = BudgetCalculator::simulate(budget, indirect_rate, &overrides)?;
                let cost = result.total_amount - result.profit_amount;

                Ok(ScenarioOutcome {
                    name: scenario.name.clone(),
                    margin: scenario.margin,
                    risk_level: RiskLevel::for_margin(scenario.margin),
                    break_even_point: Self::break_even(cost, scenario.margin),
                    result,
                })
            })
            .collect()
    }

    /// Revenue at which the project covers its cost at the given margin.
    ///
    /// Undefined at margins of 100% or more; the cost itself is returned for
    /// those and for non-positive margins.
    fn break_even(cost: Decimal, margin: Decimal) -> Decimal {
        if margin <= Decimal::ZERO || margin >= Decimal::ONE_HUNDRED {
            return cost;
        }

        cost / (Decimal::ONE - margin / Decimal::ONE_HUNDRED)
    }
}
