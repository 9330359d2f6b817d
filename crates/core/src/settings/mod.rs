//! Indirect-cost settings and schedules.

pub mod schedule;
pub mod types;

pub use schedule::{IndirectCostLine, IndirectCostSchedule};
pub use types::{CalculationMethod, CostSetting};
