//! Resolution of line item drafts against a price book.

use obra_shared::types::{BudgetId, LineItemId};
use rust_decimal::Decimal;

use super::error::PriceBookError;
use super::types::{LineItemDraft, PriceBook};
use crate::budget::{CostSplit, LineItem};

/// Resolves a draft into a fully priced line item.
///
/// Literal values on the draft always win; the price book fills whatever is
/// missing. A dangling code is only an error when the draft has no literal
/// unit price to fall back on, since extracted rows frequently carry both a
/// code annotation and explicit prices.
///
/// # Errors
///
/// Returns `PriceBookError::UnknownCode` when the unit price must come from
/// a code the book does not carry, and `PriceBookError::MissingUnitPrice`
/// when the draft has neither a literal price nor a code.
pub fn resolve_line_item(
    budget_id: BudgetId,
    draft: LineItemDraft,
    book: &PriceBook,
) -> Result<LineItem, PriceBookError> {
    let entry = draft.code.as_deref().and_then(|code| book.lookup(code));

    let unit_price = match (draft.unit_price, entry) {
        (Some(price), _) => price,
        (None, Some(entry)) => entry.unit_price,
        (None, None) => {
            return Err(match draft.code {
                Some(code) => PriceBookError::UnknownCode(code),
                None => PriceBookError::MissingUnitPrice(draft.description),
            });
        }
    };

    let split = draft
        .split
        .or_else(|| entry.map(|e| e.split))
        .unwrap_or_else(CostSplit::standard);

    let performance_rate = draft
        .performance_rate
        .or_else(|| entry.map(|e| e.performance_rate))
        .unwrap_or(Decimal::ONE);

    let unit = draft.unit.or_else(|| entry.map(|e| e.unit.clone()));

    Ok(LineItem {
        id: LineItemId::new(),
        budget_id,
        chapter: draft.chapter,
        code: draft.code,
        description: draft.description,
        unit,
        quantity: draft.quantity,
        unit_price,
        performance_rate,
        split,
        notes: draft.notes,
        order_index: 0,
    })
}
