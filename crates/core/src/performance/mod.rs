//! Work-condition adjustments to performance rates.

pub mod conditions;

pub use conditions::WorkConditions;
