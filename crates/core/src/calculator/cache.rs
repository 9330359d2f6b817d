//! Simulation result caching using Moka.
//!
//! Provides in-memory caching for simulation results to avoid redundant
//! computations when the same budget and overrides are replayed, which is
//! exactly what happens while a user drags a margin slider back and forth.

use moka::sync::Cache;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use super::engine::BudgetCalculator;
use super::error::CalculationError;
use super::types::{CalculationResult, SimulationOverrides};
use crate::budget::Budget;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for simulation results.
///
/// Keyed by a hash of the budget content, the indirect rate, and the
/// overrides, so any edit to a line item is a cache miss. Thread-safe and
/// suitable for concurrent access.
#[derive(Clone)]
pub struct SimulationCache {
    cache: Cache<String, Arc<CalculationResult>>,
}

impl SimulationCache {
    /// Creates a new simulation cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new simulation cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Runs a simulation, returning a cached result when available.
    ///
    /// A cache hit is returned with `cached: true`; otherwise the simulation
    /// runs and the result is cached before being returned.
    ///
    /// # Errors
    ///
    /// Propagates `CalculationError` from the underlying simulation; errors
    /// are never cached.
    pub fn run_cached(
        &self,
        budget: &Budget,
        indirect_rate: Decimal,
        overrides: &SimulationOverrides,
    ) -> Result<CalculationResult, CalculationError> {
        let cache_key = Self::cache_key(budget, indirect_rate, overrides);

        if let Some(cached_result) = self.cache.get(&cache_key) {
            let mut result = (*cached_result).clone();
            result.cached = true;
            return Ok(result);
        }

        let result = BudgetCalculator::simulate(budget, indirect_rate, overrides)?;
        self.cache.insert(cache_key, Arc::new(result.clone()));

        Ok(result)
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Invalidates the entry for a specific budget/override combination.
    pub fn invalidate(
        &self,
        budget: &Budget,
        indirect_rate: Decimal,
        overrides: &SimulationOverrides,
    ) {
        let cache_key = Self::cache_key(budget, indirect_rate, overrides);
        self.cache.invalidate(&cache_key);
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles this automatically in the background, but calling this
    /// explicitly makes eviction visible immediately (used by tests).
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    /// Deterministic key over budget content, rate, and overrides.
    fn cache_key(
        budget: &Budget,
        indirect_rate: Decimal,
        overrides: &SimulationOverrides,
    ) -> String {
        // HashMap iteration order is unstable; sort the adjustments by id
        // before serializing so identical inputs hash identically.
        let adjustments: BTreeMap<String, Decimal> = overrides
            .performance_adjustments
            .iter()
            .map(|(id, multiplier)| (id.to_string(), *multiplier))
            .collect();

        let payload = serde_json::json!({
            "budget": budget,
            "indirect_rate": indirect_rate,
            "profit_margin": overrides.profit_margin,
            "adjustments": adjustments,
        });

        let mut hasher = DefaultHasher::new();
        payload.to_string().hash(&mut hasher);
        format!("{:016x}", hasher.finish())
    }
}

impl Default for SimulationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{CostSplit, LineItem};
    use obra_shared::types::{BudgetId, LineItemId, ProjectId};
    use rust_decimal_macros::dec;

    fn create_test_budget() -> Budget {
        let mut budget = Budget::new(ProjectId::new(), "Cache Test", dec!(15));
        budget.add_line_item(LineItem {
            id: LineItemId::new(),
            budget_id: BudgetId::new(),
            chapter: None,
            code: Some("C-100".to_string()),
            description: "Masonry wall".to_string(),
            unit: Some("m2".to_string()),
            quantity: dec!(25),
            unit_price: dec!(80),
            performance_rate: dec!(1),
            split: CostSplit::standard(),
            notes: None,
            order_index: 0,
        });
        budget
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let cache = SimulationCache::new();
        let budget = create_test_budget();
        let overrides = SimulationOverrides::default();

        // First call - cache miss
        let result1 = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(!result1.cached, "First call should not be cached");

        // Second call - cache hit
        let result2 = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(result2.cached, "Second call should be cached");

        assert_eq!(result1.subtotal, result2.subtotal);
        assert_eq!(result1.total_amount, result2.total_amount);
    }

    #[test]
    fn test_different_overrides_not_cached() {
        let cache = SimulationCache::new();
        let budget = create_test_budget();

        let overrides1 = SimulationOverrides::default();
        let overrides2 = SimulationOverrides::with_margin(dec!(25));

        let result1 = cache.run_cached(&budget, dec!(5), &overrides1).unwrap();
        assert!(!result1.cached);

        let result2 = cache.run_cached(&budget, dec!(5), &overrides2).unwrap();
        assert!(!result2.cached, "Different overrides should not hit cache");

        let result3 = cache.run_cached(&budget, dec!(5), &overrides1).unwrap();
        assert!(result3.cached, "Same overrides should hit cache");
    }

    #[test]
    fn test_budget_edit_is_cache_miss() {
        let cache = SimulationCache::new();
        let mut budget = create_test_budget();
        let overrides = SimulationOverrides::default();

        let _ = cache.run_cached(&budget, dec!(5), &overrides).unwrap();

        budget.line_items[0].quantity = dec!(30);

        let result = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(!result.cached, "Edited budget should be cache miss");
    }

    #[test]
    fn test_invalidate_all() {
        let cache = SimulationCache::new();
        let budget = create_test_budget();
        let overrides = SimulationOverrides::default();

        let _ = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        let result = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(result.cached, "Should be cached after first call");

        cache.invalidate_all();
        cache.run_pending_tasks();

        let result = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(!result.cached, "Should be cache miss after invalidate_all");
    }

    #[test]
    fn test_invalidate_specific() {
        let cache = SimulationCache::new();
        let budget = create_test_budget();

        let overrides1 = SimulationOverrides::default();
        let overrides2 = SimulationOverrides::with_margin(dec!(25));

        let _ = cache.run_cached(&budget, dec!(5), &overrides1).unwrap();
        let _ = cache.run_cached(&budget, dec!(5), &overrides2).unwrap();

        cache.invalidate(&budget, dec!(5), &overrides1);
        cache.run_pending_tasks();

        let result1 = cache.run_cached(&budget, dec!(5), &overrides1).unwrap();
        assert!(!result1.cached, "Invalidated entry should be cache miss");

        let result2 = cache.run_cached(&budget, dec!(5), &overrides2).unwrap();
        assert!(result2.cached, "Other entry should still hit cache");
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = SimulationCache::new();
        let budget = create_test_budget();
        let item_id = budget.line_items[0].id;

        let mut overrides = SimulationOverrides::default();
        overrides.performance_adjustments.insert(item_id, dec!(-1));

        assert!(cache.run_cached(&budget, dec!(5), &overrides).is_err());
        cache.run_pending_tasks();
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn test_custom_config() {
        let cache = SimulationCache::with_config(10, 60);
        let budget = create_test_budget();
        let overrides = SimulationOverrides::default();

        let result = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(!result.cached);

        let result = cache.run_cached(&budget, dec!(5), &overrides).unwrap();
        assert!(result.cached);
    }
}
