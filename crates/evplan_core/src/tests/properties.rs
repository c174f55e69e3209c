//! Property tests for the engine, enumerator and ranking

use proptest::prelude::*;

use crate::analysis::{RankedCombinations, tornado};
use crate::config::{ActivityBuilder, ScenarioBuilder};
use crate::enumerate::{enumerate, evaluate_aligned, score};
use crate::evaluate::expected_value;
use crate::model::{Activity, DecisionKey, Outcome, Scenario, ValueConvention};

fn arb_outcomes() -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((0.0_f64..=1.0, -1.0e6_f64..1.0e6), 1..6)
}

fn activity(outcomes: &[(f64, f64)], horizon_years: u32) -> Activity {
    Activity {
        name: "Activity".to_string(),
        decision_key: DecisionKey::from("activity"),
        horizon_years,
        outcomes: outcomes
            .iter()
            .map(|&(p, v)| Outcome::new("o", p, v))
            .collect(),
        regime: None,
    }
}

fn arb_scenario() -> impl Strategy<Value = Scenario> {
    proptest::collection::vec(-1.0e4_f64..1.0e4, 1..9).prop_map(|values| {
        values
            .iter()
            .enumerate()
            .fold(ScenarioBuilder::new("arb"), |builder, (i, &v)| {
                builder.activity(ActivityBuilder::new(format!("A{i}"), format!("a{i}")).outcome("x", 1.0, v))
            })
            .build()
            .unwrap()
    })
}

proptest! {
    #[test]
    fn expected_value_is_linear_in_values(
        outcomes in arb_outcomes(),
        scale in -100.0_f64..100.0,
        horizon in 0u32..6,
        rate in 0.0_f64..0.5,
    ) {
        let base = expected_value(&activity(&outcomes, horizon), rate, ValueConvention::FutureFlow);
        let scaled: Vec<(f64, f64)> = outcomes.iter().map(|&(p, v)| (p, v * scale)).collect();
        let result = expected_value(&activity(&scaled, horizon), rate, ValueConvention::FutureFlow);
        let tolerance = 1e-6 * (1.0 + base.abs() * scale.abs());
        prop_assert!((result - base * scale).abs() <= tolerance, "{result} vs {}", base * scale);
    }

    #[test]
    fn expected_value_is_additive_over_outcomes(
        first in arb_outcomes(),
        second in arb_outcomes(),
    ) {
        let joined: Vec<(f64, f64)> = first.iter().chain(second.iter()).copied().collect();
        let whole = expected_value(&activity(&joined, 0), 0.12, ValueConvention::PresentValue);
        let parts = expected_value(&activity(&first, 0), 0.12, ValueConvention::PresentValue)
            + expected_value(&activity(&second, 0), 0.12, ValueConvention::PresentValue);
        prop_assert!((whole - parts).abs() <= 1e-6 * (1.0 + whole.abs()));
    }

    #[test]
    fn enumeration_covers_every_pattern_once(n in 0usize..12) {
        let keys: Vec<DecisionKey> = (0..n).map(|i| DecisionKey::new(format!("k{i}"))).collect();
        let patterns: Vec<u64> = enumerate(&keys).unwrap().map(|c| c.pattern.0).collect();
        let expected: Vec<u64> = (0..1u64 << n).collect();
        prop_assert_eq!(patterns, expected);
    }

    #[test]
    fn score_matches_combination_view(values in proptest::collection::vec(-100.0_f64..100.0, 0..10)) {
        let keys: Vec<DecisionKey> = (0..values.len()).map(|i| DecisionKey::new(format!("k{i}"))).collect();
        for combination in enumerate(&keys).unwrap() {
            let manual: f64 = combination
                .iter()
                .zip(&values)
                .filter(|((_, on), _)| *on)
                .map(|(_, v)| v)
                .sum();
            prop_assert!((score(combination.pattern, &values) - manual).abs() < 1e-9);
        }
    }

    #[test]
    fn ranking_is_descending(values in proptest::collection::vec(-100.0_f64..100.0, 1..10)) {
        let keys: Vec<DecisionKey> = (0..values.len()).map(|i| DecisionKey::new(format!("k{i}"))).collect();
        let ranked = RankedCombinations::new(evaluate_aligned(&keys, &values).unwrap());
        prop_assert_eq!(ranked.len(), 1 << values.len());
        for pair in ranked.rows().windows(2) {
            prop_assert!(pair[0].total_expected_value >= pair[1].total_expected_value);
        }
    }

    #[test]
    fn best_combination_keeps_exactly_the_positive_activities(scenario in arb_scenario()) {
        let ranked = RankedCombinations::new(crate::enumerate::evaluate_combinations(&scenario).unwrap());
        let expected: f64 = scenario.slot_values().iter().filter(|v| **v > 0.0).sum();
        let best = ranked.best().unwrap().total_expected_value;
        prop_assert!((best - expected).abs() < 1e-6);
    }

    #[test]
    fn tornado_is_sorted_and_equals_expected_value(scenario in arb_scenario()) {
        let rows = tornado(&scenario);
        prop_assert_eq!(rows.len(), scenario.activities().len());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].impact.abs() >= pair[1].impact.abs());
        }
        for row in &rows {
            prop_assert_eq!(Some(row.impact), scenario.expected_value(row.decision_key.as_str()));
        }
    }
}
