//! Tests for the built-in park scenarios

use crate::analysis::{MatchRule, OUTSOURCED_STRATEGY, SELF_MANAGED_STRATEGY, compare_regimes};
use crate::config::presets::{self, PRESET_NAMES};
use crate::evaluate::{PROBABILITY_TOLERANCE, validate_probabilities};
use crate::model::{BetterOption, Regime, ValueConvention};
use crate::pipeline::{analyze, compare};

#[test]
fn test_preset_probabilities_sum_to_one() {
    for name in PRESET_NAMES {
        let scenario = presets::by_name(name).unwrap().unwrap();
        for activity in scenario.activities() {
            let sum = activity.probability_sum();
            assert!(
                (sum - 1.0).abs() <= PROBABILITY_TOLERANCE,
                "{name}: {} sums to {sum}",
                activity.name
            );
        }
        assert!(validate_probabilities(&scenario).is_empty());
    }
}

#[test]
fn test_regime_presets_use_future_flows() {
    for scenario in [presets::self_managed().unwrap(), presets::concession().unwrap()] {
        assert_eq!(scenario.value_convention(), ValueConvention::FutureFlow);
        assert_eq!(scenario.discount_rate(), 0.06);
    }
    let combined = presets::park_combined().unwrap();
    assert_eq!(combined.value_convention(), ValueConvention::PresentValue);
    assert_eq!(combined.discount_rate(), 0.12);
}

/// Kayak (self-managed): (0.25 * 1.5M + 0.25 * 0.75M + 0.5 * 0.25M) / 1.06^2
#[test]
fn test_self_managed_kayak_expected_value() {
    let scenario = presets::self_managed().unwrap();
    let expected = 687_500.0 / (1.06_f64 * 1.06);
    let actual = scenario.expected_value("kayak").unwrap();
    assert!((actual - expected).abs() < 1e-6, "kayak EV {actual}");
}

#[test]
fn test_regime_comparison() {
    let rows = compare(
        &presets::self_managed().unwrap(),
        &presets::concession().unwrap(),
        &MatchRule::ExactName,
    );
    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|r| !matches!(
        r.better_option,
        BetterOption::OnlySelf | BetterOption::OnlyConcession
    )));

    let option = |name: &str| {
        rows.iter()
            .find(|r| r.activity == name)
            .map(|r| r.better_option)
            .unwrap()
    };
    assert_eq!(option("Trekking"), BetterOption::SelfManaged);
    assert_eq!(option("Cabalgatas"), BetterOption::Concession);

    for pair in rows.windows(2) {
        assert!(pair[0].difference.abs() >= pair[1].difference.abs());
    }
}

/// Both halves of the combined scenario carry the same figures; signage has
/// no concession counterpart
#[test]
fn test_combined_halves_tie() {
    let scenario = presets::park_combined().unwrap();
    let rows = compare_regimes(&scenario, &MatchRule::default());
    assert_eq!(rows.len(), 10);

    let (signage, paired): (Vec<_>, Vec<_>) =
        rows.iter().partition(|r| r.activity == "Señaléticas");
    assert_eq!(paired.len(), 9);
    assert!(paired.iter().all(|r| r.better_option == BetterOption::Tie));
    assert!(paired.iter().any(|r| r.activity == "Kayak"));

    assert_eq!(signage.len(), 1);
    assert_eq!(signage[0].better_option, BetterOption::OnlySelf);
    assert_eq!(signage[0].ev_concession, 0.0);
    assert!((signage[0].ev_self_managed - 2_000.0).abs() < 1e-9);
}

#[test]
fn test_combined_summary_respects_regimes() {
    let scenario = presets::park_combined().unwrap();
    let analysis = analyze(&scenario).unwrap();
    assert_eq!(analysis.combination_count(), 1 << 20);
    assert_eq!(analysis.summary.len(), 2);

    let outsourced = &analysis.summary[0];
    assert_eq!(outsourced.strategy, OUTSOURCED_STRATEGY);
    for name in &outsourced.selected_activities {
        let activity = scenario.activities().iter().find(|a| &a.name == name).unwrap();
        assert_eq!(activity.regime, Some(Regime::Concession));
        assert!(scenario.expected_value_of(activity) > 0.0);
    }

    let own = &analysis.summary[1];
    assert_eq!(own.strategy, SELF_MANAGED_STRATEGY);
    assert!(own.selected_activities.iter().all(|n| !n.ends_with("Concesión")));

    // Signage is positive and self-managed only, so it tips the balance
    assert!(own.total_expected_value > outsourced.total_expected_value);
}
