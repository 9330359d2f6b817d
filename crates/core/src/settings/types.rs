//! Indirect-cost setting types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a cost setting computes its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// A percentage of the budget subtotal.
    Percentage(Decimal),
    /// A fixed amount regardless of subtotal.
    Fixed(Decimal),
}

/// One named indirect-cost rule configured by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSetting {
    /// Setting name (e.g., "transport", "overhead").
    pub name: String,
    /// Calculation method.
    pub method: CalculationMethod,
    /// Inactive settings contribute nothing.
    pub active: bool,
}

impl CostSetting {
    /// Creates an active percentage-of-subtotal setting.
    #[must_use]
    pub fn percentage(name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            method: CalculationMethod::Percentage(rate),
            active: true,
        }
    }

    /// Creates an active fixed-amount setting.
    #[must_use]
    pub fn fixed(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            method: CalculationMethod::Fixed(amount),
            active: true,
        }
    }
}
