//! Price book data types.

use chrono::NaiveDate;
use obra_shared::types::{PriceBookId, PriceEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::budget::CostSplit;

/// One priced unit of work in a price book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Price entry ID.
    pub id: PriceEntryId,
    /// Work code (e.g., "HORM-020").
    pub code: String,
    /// Description of the work.
    pub description: String,
    /// Unit of measure.
    pub unit: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Default labor/material/equipment split.
    pub split: CostSplit,
    /// Default performance rate.
    pub performance_rate: Decimal,
    /// Category (e.g., "concrete", "finishes").
    pub category: Option<String>,
    /// Inactive entries are skipped by lookup.
    pub active: bool,
}

impl PriceEntry {
    /// Creates an active entry with the standard split and nominal performance.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: PriceEntryId::new(),
            code: code.into(),
            description: description.into(),
            unit: unit.into(),
            unit_price,
            split: CostSplit::standard(),
            performance_rate: Decimal::ONE,
            category: None,
            active: true,
        }
    }
}

/// An in-memory price book, indexed by work code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBook {
    /// Price book ID.
    pub id: PriceBookId,
    /// Price book name.
    pub name: String,
    /// First day the prices apply, if bounded.
    pub valid_from: Option<NaiveDate>,
    /// Last day the prices apply, if bounded.
    pub valid_to: Option<NaiveDate>,
    entries: HashMap<String, PriceEntry>,
}

impl PriceBook {
    /// Creates a price book from entries. Later entries replace earlier ones
    /// with the same code.
    #[must_use]
    pub fn from_entries(name: impl Into<String>, entries: Vec<PriceEntry>) -> Self {
        Self {
            id: PriceBookId::new(),
            name: name.into(),
            valid_from: None,
            valid_to: None,
            entries: entries
                .into_iter()
                .map(|entry| (entry.code.clone(), entry))
                .collect(),
        }
    }

    /// Looks up an active entry by code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&PriceEntry> {
        self.entries.get(code).filter(|entry| entry.active)
    }

    /// Number of entries, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the book has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the book applies on the given date.
    #[must_use]
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| date >= from)
            && self.valid_to.is_none_or(|to| date <= to)
    }
}

/// A line item as extracted or imported, before price resolution.
///
/// Literal values always win over the price book; the book only fills gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItemDraft {
    /// Chapter the item belongs to.
    pub chapter: Option<String>,
    /// Price book code reference.
    pub code: Option<String>,
    /// Description of the work.
    pub description: String,
    /// Unit of measure.
    pub unit: Option<String>,
    /// Quantity of work.
    pub quantity: Decimal,
    /// Literal unit price, when the source carried one.
    pub unit_price: Option<Decimal>,
    /// Literal performance rate, when the source carried one.
    pub performance_rate: Option<Decimal>,
    /// Literal split, when the source carried one.
    pub split: Option<CostSplit>,
    /// Free-form notes.
    pub notes: Option<String>,
}
