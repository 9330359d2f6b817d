//! Price book error types.

use obra_shared::AppError;
use thiserror::Error;

/// Price book resolution errors.
#[derive(Debug, Error)]
pub enum PriceBookError {
    /// Draft references a code the price book does not carry.
    #[error("Price book has no entry for code: {0}")]
    UnknownCode(String),

    /// Draft carries neither a unit price nor a resolvable code.
    #[error("No unit price available for item: {0}")]
    MissingUnitPrice(String),
}

impl From<PriceBookError> for AppError {
    fn from(err: PriceBookError) -> Self {
        match err {
            PriceBookError::UnknownCode(_) => Self::NotFound(err.to_string()),
            PriceBookError::MissingUnitPrice(_) => Self::Validation(err.to_string()),
        }
    }
}
