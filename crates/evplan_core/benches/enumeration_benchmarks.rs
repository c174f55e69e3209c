//! Criterion benchmarks for evplan_core enumeration
//!
//! Run with: cargo bench -p evplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use evplan_core::analysis::RankedCombinations;
use evplan_core::config::presets;
use evplan_core::enumerate::{BitPattern, evaluate_combinations, score};
use evplan_core::pipeline::analyze;
use evplan_core::{ActivityBuilder, Scenario, ScenarioBuilder};

fn synthetic_scenario(decisions: usize) -> Scenario {
    (0..decisions)
        .fold(ScenarioBuilder::new("synthetic"), |builder, i| {
            let value = (i as f64 + 1.0) * 1_000.0;
            builder.activity(
                ActivityBuilder::new(format!("Activity {i}"), format!("a{i}"))
                    .horizon_years(2)
                    .outcome("Success", 0.4, value)
                    .outcome("Failure", 0.6, -value / 2.0),
            )
        })
        .future_flows()
        .build()
        .unwrap()
}

fn bench_score(c: &mut Criterion) {
    let values: Vec<f64> = (0..20).map(|i| i as f64 * 10.0 - 50.0).collect();

    c.bench_function("score_20_slots", |b| {
        b.iter(|| score(black_box(BitPattern(0xA_AAAA)), black_box(&values)))
    });
}

fn bench_evaluate_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_combinations");

    for decisions in [10, 12, 14, 16].iter() {
        let scenario = synthetic_scenario(*decisions);
        group.bench_with_input(
            BenchmarkId::new("decisions", decisions),
            decisions,
            |b, _| b.iter(|| evaluate_combinations(black_box(&scenario))),
        );
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let scenario = synthetic_scenario(14);
    let results = evaluate_combinations(&scenario).unwrap();

    c.bench_function("rank_14_decisions", |b| {
        b.iter(|| RankedCombinations::new(black_box(results.clone())))
    });
}

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    let self_managed = presets::self_managed().unwrap();
    let combined = presets::park_combined().unwrap();

    group.bench_function("analyze_self_managed", |b| {
        b.iter(|| analyze(black_box(&self_managed)))
    });
    group.sample_size(10);
    group.bench_function("analyze_park_combined", |b| {
        b.iter(|| analyze(black_box(&combined)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_score,
    bench_evaluate_combinations,
    bench_ranking,
    bench_presets,
);
criterion_main!(benches);
