//! Calculation error types.

use obra_shared::AppError;
use obra_shared::types::LineItemId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Calculation input errors.
///
/// All variants are raised before any arithmetic runs; a calculation never
/// returns a partially computed breakdown. `Decimal` has no non-finite
/// values, so the configuration checks reduce to sign checks.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Profit margin is negative.
    #[error("Profit margin cannot be negative: {margin}")]
    NegativeProfitMargin {
        /// The rejected margin.
        margin: Decimal,
    },

    /// Indirect cost rate is negative.
    #[error("Indirect cost rate cannot be negative: {rate}")]
    NegativeIndirectRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// A line item has a negative quantity.
    #[error("Line item {item_id} has a negative quantity")]
    NegativeQuantity {
        /// Offending line item.
        item_id: LineItemId,
    },

    /// A line item has a negative unit price.
    #[error("Line item {item_id} has a negative unit price")]
    NegativeUnitPrice {
        /// Offending line item.
        item_id: LineItemId,
    },

    /// A line item has a zero or negative performance rate.
    #[error("Line item {item_id} has a non-positive performance rate")]
    NonPositivePerformanceRate {
        /// Offending line item.
        item_id: LineItemId,
    },

    /// A simulation supplied a zero or negative performance multiplier.
    #[error("Performance adjustment for item {item_id} must be positive, got {multiplier}")]
    InvalidPerformanceAdjustment {
        /// Line item the adjustment targets.
        item_id: LineItemId,
        /// The rejected multiplier.
        multiplier: Decimal,
    },
}

impl CalculationError {
    /// True for errors in the calculation configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeProfitMargin { .. }
                | Self::NegativeIndirectRate { .. }
                | Self::InvalidPerformanceAdjustment { .. }
        )
    }

    /// True for errors in the line item data.
    #[must_use]
    pub const fn is_line_item_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeQuantity { .. }
                | Self::NegativeUnitPrice { .. }
                | Self::NonPositivePerformanceRate { .. }
        )
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        Self::Validation(err.to_string())
    }
}
