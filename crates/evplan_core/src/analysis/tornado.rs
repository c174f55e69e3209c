use crate::model::{Scenario, TornadoRow};

/// Marginal impact of each activity, largest swing first.
///
/// The value of never doing an activity is defined as zero, so the impact is
/// the activity's expected value itself.
#[must_use]
pub fn tornado(scenario: &Scenario) -> Vec<TornadoRow> {
    let mut rows: Vec<TornadoRow> = scenario
        .expected_values()
        .into_iter()
        .map(|(activity, expected)| TornadoRow {
            activity: activity.name.clone(),
            decision_key: activity.decision_key.clone(),
            impact: expected - 0.0,
        })
        .collect();
    rows.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActivityBuilder, ScenarioBuilder};

    #[test]
    fn test_tornado_orders_by_absolute_impact() {
        let scenario = ScenarioBuilder::new("t")
            .activity(ActivityBuilder::new("Small", "small").outcome("x", 1.0, 3.0))
            .activity(ActivityBuilder::new("Loss", "loss").outcome("x", 1.0, -50.0))
            .activity(ActivityBuilder::new("Gain", "gain").outcome("x", 1.0, 20.0))
            .build()
            .unwrap();

        let rows = tornado(&scenario);
        let names: Vec<&str> = rows.iter().map(|r| r.activity.as_str()).collect();
        assert_eq!(names, vec!["Loss", "Gain", "Small"]);
        assert_eq!(rows[0].impact, -50.0);
        for row in &rows {
            assert_eq!(Some(row.impact), scenario.expected_value(row.decision_key.as_str()));
        }
    }
}
