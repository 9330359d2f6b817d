//! Benchmark test for calculation performance.

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::time::Instant;

    use crate::budget::{Budget, CostSplit, LineItem};
    use crate::calculator::{
        BudgetCalculator, CalculationConfig, MarginScenario, ScenarioAnalysis,
    };
    use obra_shared::types::{BudgetId, LineItemId, ProjectId};

    /// Generate a budget with many line items of varying size.
    fn generate_budget(num_items: usize) -> Budget {
        let mut budget = Budget::new(ProjectId::new(), "Benchmark", dec!(15));

        for i in 0..num_items {
            budget.add_line_item(LineItem {
                id: LineItemId::new(),
                budget_id: BudgetId::new(),
                chapter: Some(format!("Chapter {}", i % 10)),
                code: Some(format!("C-{i:04}")),
                description: format!("Work item {i}"),
                unit: Some("m3".to_string()),
                quantity: Decimal::from((i % 50) + 1),
                unit_price: Decimal::from((i % 200) + 10),
                performance_rate: dec!(1),
                split: CostSplit::standard(),
                notes: None,
                order_index: 0,
            });
        }

        budget
    }

    #[test]
    fn benchmark_calculate_1000_items() {
        let budget = generate_budget(1000);
        let config = CalculationConfig::new(dec!(15), dec!(11));

        let start = Instant::now();
        let result = BudgetCalculator::calculate(&budget, &config).unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 1000 line items ===");
        println!("Duration: {duration:?}");
        println!("Items calculated: {}", result.items_calculated);

        assert_eq!(result.items_calculated, 1000);
        assert!(
            duration.as_millis() < 1000,
            "Calculation took {}ms, expected <1000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_scenario_set_500_items() {
        let budget = generate_budget(500);
        let scenarios = MarginScenario::standard_set(budget.profit_margin);

        let start = Instant::now();
        let outcomes = ScenarioAnalysis::run(&budget, dec!(11), &scenarios).unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 4 scenarios over 500 line items ===");
        println!("Duration: {duration:?}");

        assert_eq!(outcomes.len(), 4);
        assert!(
            duration.as_millis() < 2000,
            "Scenario analysis took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }
}
