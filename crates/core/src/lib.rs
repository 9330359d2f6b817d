//! Core calculation logic for Obra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `budget` - Budget and line item types, data-entry validation
//! - `calculator` - Cost breakdown engine, simulation, scenario analysis
//! - `performance` - Work-condition adjustments to performance rates
//! - `pricebook` - Price book lookup and line item resolution
//! - `reports` - Chapter totals, material schedule, labor estimates
//! - `settings` - Indirect-cost settings and schedules

pub mod budget;
pub mod calculator;
pub mod performance;
pub mod pricebook;
pub mod reports;
pub mod settings;
