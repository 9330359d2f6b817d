//! Budget data types.

use chrono::{DateTime, Utc};
use obra_shared::types::{BudgetId, LineItemId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::CalculationResult;

/// Budget lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Budget is being edited.
    Draft,
    /// Budget has been approved by the client.
    Approved,
    /// Budget has been rejected.
    Rejected,
}

/// Cost category split of a line item, in percent.
///
/// The three percentages nominally sum to 100; the calculator uses the values
/// as given and treats any remainder as unallocated. Strict checking belongs
/// to the data-entry layer (`validation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSplit {
    /// Share of the item total attributed to labor.
    pub labor_percentage: Decimal,
    /// Share of the item total attributed to materials.
    pub material_percentage: Decimal,
    /// Share of the item total attributed to equipment.
    pub equipment_percentage: Decimal,
}

impl CostSplit {
    /// Creates a split from the three percentages.
    #[must_use]
    pub const fn new(labor: Decimal, material: Decimal, equipment: Decimal) -> Self {
        Self {
            labor_percentage: labor,
            material_percentage: material,
            equipment_percentage: equipment,
        }
    }

    /// The standard construction split: 40% labor, 50% material, 10% equipment.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            Decimal::new(40, 0),
            Decimal::new(50, 0),
            Decimal::new(10, 0),
        )
    }

    /// Sum of the three percentages.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.labor_percentage + self.material_percentage + self.equipment_percentage
    }

    /// Returns true if the split allocates exactly 100%.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total() == Decimal::ONE_HUNDRED
    }
}

/// A budget line item: one priced unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item ID.
    pub id: LineItemId,
    /// Parent budget ID.
    pub budget_id: BudgetId,
    /// Chapter the item belongs to (e.g., "Foundations").
    pub chapter: Option<String>,
    /// Price book code, when the item was resolved from one.
    pub code: Option<String>,
    /// Description of the work.
    pub description: String,
    /// Unit of measure (e.g., "m3", "kg").
    pub unit: Option<String>,
    /// Quantity of work.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Productivity multiplier; 1.0 is nominal crew performance.
    pub performance_rate: Decimal,
    /// Labor/material/equipment split.
    pub split: CostSplit,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Position within the budget.
    pub order_index: u32,
}

impl LineItem {
    /// Nominal total price: `quantity * unit_price`, before any performance
    /// adjustment. The calculator applies the performance rate per pass.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A budget: an ordered collection of line items plus cached summary fields.
///
/// The summary fields (`subtotal`, `profit_amount`, `final_amount`) are caches
/// of the last calculation pass and are stale until [`Budget::apply_calculation`]
/// is called again. Invariant while the cache is valid:
/// `final_amount == subtotal + profit_amount` (the cached `subtotal` includes
/// indirect costs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Project this budget belongs to.
    pub project_id: ProjectId,
    /// Budget name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Version label.
    pub version: String,
    /// Lifecycle status.
    pub status: BudgetStatus,
    /// Configured profit margin in percent; the default for simulations.
    pub profit_margin: Decimal,
    /// Line items in display order.
    pub line_items: Vec<LineItem>,
    /// Cached cost including indirect costs, excluding profit.
    pub subtotal: Decimal,
    /// Cached profit amount.
    pub profit_amount: Decimal,
    /// Cached client-facing total.
    pub final_amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Creates an empty draft budget.
    #[must_use]
    pub fn new(project_id: ProjectId, name: impl Into<String>, profit_margin: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            project_id,
            name: name.into(),
            description: None,
            version: "1.0".to_string(),
            status: BudgetStatus::Draft,
            profit_margin,
            line_items: Vec::new(),
            subtotal: Decimal::ZERO,
            profit_amount: Decimal::ZERO,
            final_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a line item, claiming ownership and assigning its position.
    pub fn add_line_item(&mut self, mut item: LineItem) {
        item.budget_id = self.id;
        item.order_index = u32::try_from(self.line_items.len()).unwrap_or(u32::MAX);
        self.line_items.push(item);
        self.updated_at = Utc::now();
    }

    /// Returns true while the budget can still be modified.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self.status, BudgetStatus::Draft)
    }

    /// Marks the budget as approved.
    pub fn approve(&mut self) {
        self.status = BudgetStatus::Approved;
        self.updated_at = Utc::now();
    }

    /// Marks the budget as rejected.
    pub fn reject(&mut self) {
        self.status = BudgetStatus::Rejected;
        self.updated_at = Utc::now();
    }

    /// Writes the cached summary fields from a calculation result.
    ///
    /// This is the single writer of the summary cache. The cached `subtotal`
    /// is the cost including indirect costs (`total_amount - profit_amount`)
    /// so that `final_amount == subtotal + profit_amount` holds.
    pub fn apply_calculation(&mut self, result: &CalculationResult) {
        self.subtotal = result.total_amount - result.profit_amount;
        self.profit_amount = result.profit_amount;
        self.final_amount = result.total_amount;
        self.updated_at = Utc::now();
    }
}
