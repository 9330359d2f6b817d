//! Cost breakdown engine, simulation, and scenario analysis.

pub mod cache;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod types;


#[cfg(test)]
mod benchmark;

pub use cache::SimulationCache;
pub use engine::BudgetCalculator;
pub use error::CalculationError;
pub use scenario::{MarginScenario, RiskLevel, ScenarioAnalysis, ScenarioOutcome};
pub use types::{
    CalculatedItem, CalculationConfig, CalculationResult, CostBreakdown, SimulationOverrides,
};
