//! Site conditions that adjust a crew's performance rate.
//!
//! Each flagged condition multiplies the adjustment factor; the compound
//! factor is clamped to [0.50, 1.50] so no combination of conditions can
//! push an estimate into implausible territory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lower clamp for the compound adjustment factor.
const MIN_FACTOR: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Upper clamp for the compound adjustment factor.
const MAX_FACTOR: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// Site conditions affecting crew productivity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkConditions {
    /// Rain, strong wind, or cold.
    pub adverse_weather: bool,
    /// Conditions that stop work intermittently.
    pub extreme_weather: bool,
    /// Restricted site access for crews or machinery.
    pub difficult_access: bool,
    /// Scaffolding or elevated platforms required.
    pub work_at_height: bool,
    /// Below-grade work requiring ventilation.
    pub underground: bool,
    /// Occupied or traffic-heavy surroundings.
    pub congested_area: bool,
    /// Night shift work.
    pub night_work: bool,
    /// Extended shifts beyond the standard day.
    pub overtime: bool,
    /// Work requiring specialized sequencing.
    pub complex_work: bool,
    /// Crew that has not worked together before.
    pub new_crew: bool,
    /// Crew with a proven track record.
    pub experienced_crew: bool,
    /// Ideal weather, access, and staging.
    pub optimal_conditions: bool,
}

impl WorkConditions {
    /// Multiplicative factor per flagged condition.
    fn factors(self) -> impl Iterator<Item = Decimal> {
        [
            (self.adverse_weather, Decimal::from_parts(85, 0, 0, false, 2)),
            (self.extreme_weather, Decimal::from_parts(70, 0, 0, false, 2)),
            (self.difficult_access, Decimal::from_parts(90, 0, 0, false, 2)),
            (self.work_at_height, Decimal::from_parts(85, 0, 0, false, 2)),
            (self.underground, Decimal::from_parts(80, 0, 0, false, 2)),
            (self.congested_area, Decimal::from_parts(90, 0, 0, false, 2)),
            (self.night_work, Decimal::from_parts(85, 0, 0, false, 2)),
            (self.overtime, Decimal::from_parts(90, 0, 0, false, 2)),
            (self.complex_work, Decimal::from_parts(85, 0, 0, false, 2)),
            (self.new_crew, Decimal::from_parts(80, 0, 0, false, 2)),
            (self.experienced_crew, Decimal::from_parts(110, 0, 0, false, 2)),
            (self.optimal_conditions, Decimal::from_parts(115, 0, 0, false, 2)),
        ]
        .into_iter()
        .filter_map(|(flagged, factor)| flagged.then_some(factor))
    }

    /// Compound adjustment factor, clamped to [0.50, 1.50].
    #[must_use]
    pub fn factor(self) -> Decimal {
        let compound = self
            .factors()
            .fold(Decimal::ONE, |acc, factor| acc * factor);

        compound.clamp(MIN_FACTOR, MAX_FACTOR)
    }

    /// Applies the compound factor to a base performance rate.
    #[must_use]
    pub fn adjusted_rate(self, base_rate: Decimal) -> Decimal {
        base_rate * self.factor()
    }
}
