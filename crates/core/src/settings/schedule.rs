//! Reduction of cost settings into the rate handed to the calculator.
//!
//! The calculator never owns indirect-cost policy; it multiplies whatever
//! rate this schedule resolves for it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CalculationMethod, CostSetting};

/// One resolved indirect-cost amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndirectCostLine {
    /// Setting name.
    pub name: String,
    /// Amount for the given subtotal.
    pub amount: Decimal,
}

/// A company's active indirect-cost settings, reducible over a subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndirectCostSchedule {
    settings: Vec<CostSetting>,
}

impl IndirectCostSchedule {
    /// Creates a schedule from configured settings.
    #[must_use]
    pub const fn new(settings: Vec<CostSetting>) -> Self {
        Self { settings }
    }

    /// The standard construction overheads: transport 2%, tools 1.5%,
    /// machinery 2.5%, general overhead 5%.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            CostSetting::percentage("transport", Decimal::new(2, 0)),
            CostSetting::percentage("tools", Decimal::new(15, 1)),
            CostSetting::percentage("machinery", Decimal::new(25, 1)),
            CostSetting::percentage("overhead", Decimal::new(5, 0)),
        ])
    }

    /// The configured settings.
    #[must_use]
    pub fn settings(&self) -> &[CostSetting] {
        &self.settings
    }

    /// Sum of the active percentage rates, in percent.
    #[must_use]
    pub fn percentage_rate(&self) -> Decimal {
        self.settings
            .iter()
            .filter(|s| s.active)
            .filter_map(|s| match s.method {
                CalculationMethod::Percentage(rate) => Some(rate),
                CalculationMethod::Fixed(_) => None,
            })
            .sum()
    }

    /// Total indirect cost for a subtotal: percentage settings scale with it,
    /// fixed settings do not.
    #[must_use]
    pub fn total_for(&self, subtotal: Decimal) -> Decimal {
        self.itemize(subtotal).iter().map(|line| line.amount).sum()
    }

    /// Per-setting amounts for a subtotal, in configuration order.
    #[must_use]
    pub fn itemize(&self, subtotal: Decimal) -> Vec<IndirectCostLine> {
        self.settings
            .iter()
            .filter(|s| s.active)
            .map(|s| IndirectCostLine {
                name: s.name.clone(),
                amount: match s.method {
                    CalculationMethod::Percentage(rate) => {
                        subtotal * rate / Decimal::ONE_HUNDRED
                    }
                    CalculationMethod::Fixed(amount) => amount,
                },
            })
            .collect()
    }

    /// The rate in percent that, applied to the subtotal, reproduces the
    /// schedule's total. Zero for a zero subtotal: fixed amounts cannot be
    /// expressed as a rate over nothing.
    #[must_use]
    pub fn effective_rate(&self, subtotal: Decimal) -> Decimal {
        if subtotal.is_zero() {
            return Decimal::ZERO;
        }

        self.total_for(subtotal) / subtotal * Decimal::ONE_HUNDRED
    }
}

impl Default for IndirectCostSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_rate_is_eleven_percent() {
        let schedule = IndirectCostSchedule::standard();
        assert_eq!(schedule.percentage_rate(), dec!(11));
        assert_eq!(schedule.total_for(dec!(1000)), dec!(110.0));
    }

    #[test]
    fn test_inactive_settings_contribute_nothing() {
        let mut settings = vec![
            CostSetting::percentage("transport", dec!(2)),
            CostSetting::percentage("overhead", dec!(5)),
        ];
        settings[0].active = false;

        let schedule = IndirectCostSchedule::new(settings);
        assert_eq!(schedule.percentage_rate(), dec!(5));
        assert_eq!(schedule.total_for(dec!(100)), dec!(5.00));
    }

    #[test]
    fn test_fixed_settings_ignore_subtotal() {
        let schedule = IndirectCostSchedule::new(vec![
            CostSetting::percentage("overhead", dec!(5)),
            CostSetting::fixed("site office", dec!(250)),
        ]);

        assert_eq!(schedule.total_for(dec!(1000)), dec!(300.00));
        assert_eq!(schedule.total_for(dec!(2000)), dec!(350.00));
    }

    #[test]
    fn test_itemize_sums_to_total() {
        let schedule = IndirectCostSchedule::new(vec![
            CostSetting::percentage("transport", dec!(2)),
            CostSetting::fixed("permits", dec!(120)),
            CostSetting::percentage("overhead", dec!(5)),
        ]);

        let subtotal = dec!(5000);
        let lines = schedule.itemize(subtotal);

        assert_eq!(lines.len(), 3);
        let sum: Decimal = lines.iter().map(|l| l.amount).sum();
        assert_eq!(sum, schedule.total_for(subtotal));
    }

    #[test]
    fn test_effective_rate_reproduces_total() {
        let schedule = IndirectCostSchedule::new(vec![
            CostSetting::percentage("overhead", dec!(5)),
            CostSetting::fixed("site office", dec!(50)),
        ]);

        let subtotal = dec!(1000);
        let rate = schedule.effective_rate(subtotal);

        assert_eq!(subtotal * rate / Decimal::ONE_HUNDRED, dec!(100.00));
    }

    #[test]
    fn test_effective_rate_zero_subtotal() {
        let schedule = IndirectCostSchedule::standard();
        assert_eq!(schedule.effective_rate(Decimal::ZERO), Decimal::ZERO);
    }
}
