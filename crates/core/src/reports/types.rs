//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one chapter of a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterTotal {
    /// Chapter name; items without a chapter group under "General".
    pub chapter: String,
    /// Number of line items in the chapter.
    pub item_count: usize,
    /// Sum of nominal item totals.
    pub subtotal: Decimal,
}

/// One aggregated material requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// Description of the work the material belongs to.
    pub description: String,
    /// Unit of measure.
    pub unit: Option<String>,
    /// Total quantity across matching items.
    pub quantity: Decimal,
    /// Material share of the matching items' totals.
    pub estimated_cost: Decimal,
    /// Number of line items aggregated.
    pub item_count: usize,
}

/// Aggregated material needs for a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSchedule {
    /// Requirements in description order.
    pub requirements: Vec<MaterialRequirement>,
    /// Sum of estimated material costs.
    pub total_cost: Decimal,
    /// Number of distinct requirements.
    pub total_lines: usize,
}

/// Labor cost and hours for one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterLabor {
    /// Chapter name.
    pub chapter: String,
    /// Labor share of the chapter's item totals.
    pub labor_cost: Decimal,
    /// Hours at the estimate's hourly rate.
    pub estimated_hours: Decimal,
}

/// Labor-hour estimate for a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborEstimate {
    /// Total labor cost across all items.
    pub total_labor_cost: Decimal,
    /// Total hours at the hourly rate.
    pub total_estimated_hours: Decimal,
    /// Hourly rate the estimate used.
    pub hourly_rate: Decimal,
    /// Per-chapter breakdown in chapter order.
    pub by_chapter: Vec<ChapterLabor>,
}
