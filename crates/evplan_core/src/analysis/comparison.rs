//! Cross-scenario comparison (self-managed vs concession)

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Activity, BetterOption, ComparisonRow, Regime, Scenario};

/// How activity names are matched across two scenarios.
///
/// Some scenario sets qualify every name with its regime ("Kayak - Propio",
/// "Kayak - Concesión") while others share plain names ("Kayak"). The rule is
/// chosen explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Names must be identical
    ExactName,
    /// A trailing `separator + suffix` is removed before matching; names
    /// without a listed suffix are matched as they are
    StripSuffix {
        separator: String,
        suffixes: Vec<String>,
    },
}

impl Default for MatchRule {
    fn default() -> Self {
        MatchRule::StripSuffix {
            separator: " - ".to_string(),
            suffixes: [
                "Propio",
                "Concesión",
                "Concesion",
                "Self-managed",
                "Concession",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl MatchRule {
    /// Name used as the matching key
    #[must_use]
    pub fn normalize<'a>(&self, name: &'a str) -> &'a str {
        match self {
            MatchRule::ExactName => name,
            MatchRule::StripSuffix {
                separator,
                suffixes,
            } => suffixes
                .iter()
                .find_map(|suffix| {
                    name.strip_suffix(suffix.as_str())
                        .and_then(|rest| rest.strip_suffix(separator.as_str()))
                })
                .map_or(name, str::trim_end),
        }
    }
}

/// Compare two lists of `(activity name, expected value)`.
///
/// Rows are sorted by descending absolute difference; ties keep self-managed
/// order followed by the unmatched concession activities.
#[must_use]
pub fn compare_values(
    self_managed: &[(String, f64)],
    concession: &[(String, f64)],
    rule: &MatchRule,
) -> Vec<ComparisonRow> {
    // Duplicate names pair up in order of appearance on each side
    let mut lookup: FxHashMap<&str, VecDeque<usize>> = FxHashMap::default();
    for (i, (name, _)) in concession.iter().enumerate() {
        lookup.entry(rule.normalize(name)).or_default().push_back(i);
    }
    let mut matched = vec![false; concession.len()];
    let mut rows = Vec::with_capacity(self_managed.len() + concession.len());

    for (name, ev_self) in self_managed {
        let key = rule.normalize(name);
        match lookup.get_mut(key).and_then(VecDeque::pop_front) {
            Some(i) => {
                matched[i] = true;
                rows.push(matched_row(key, *ev_self, concession[i].1));
            }
            None => rows.push(ComparisonRow {
                activity: key.to_string(),
                ev_self_managed: *ev_self,
                ev_concession: 0.0,
                difference: *ev_self,
                better_option: BetterOption::OnlySelf,
                advantage_self_managed: 0.0,
                advantage_concession: 0.0,
            }),
        }
    }

    for (i, (name, ev_concession)) in concession.iter().enumerate() {
        if matched[i] {
            continue;
        }
        rows.push(ComparisonRow {
            activity: rule.normalize(name).to_string(),
            ev_self_managed: 0.0,
            ev_concession: *ev_concession,
            difference: -ev_concession,
            better_option: BetterOption::OnlyConcession,
            advantage_self_managed: 0.0,
            advantage_concession: 0.0,
        });
    }

    rows.sort_by(|a, b| b.difference.abs().total_cmp(&a.difference.abs()));
    rows
}

fn matched_row(name: &str, ev_self: f64, ev_concession: f64) -> ComparisonRow {
    let difference = ev_self - ev_concession;
    let better_option = if difference > 0.0 {
        BetterOption::SelfManaged
    } else if difference < 0.0 {
        BetterOption::Concession
    } else {
        BetterOption::Tie
    };
    ComparisonRow {
        activity: name.to_string(),
        ev_self_managed: ev_self,
        ev_concession,
        difference,
        better_option,
        advantage_self_managed: difference.max(0.0),
        advantage_concession: (-difference).max(0.0),
    }
}

fn named_values<'a>(
    scenario: &Scenario,
    activities: impl Iterator<Item = &'a Activity>,
) -> Vec<(String, f64)> {
    activities
        .map(|a| (a.name.clone(), scenario.expected_value_of(a)))
        .collect()
}

/// Compare two independently evaluated scenarios
#[must_use]
pub fn compare_scenarios(
    self_managed: &Scenario,
    concession: &Scenario,
    rule: &MatchRule,
) -> Vec<ComparisonRow> {
    compare_values(
        &named_values(self_managed, self_managed.activities().iter()),
        &named_values(concession, concession.activities().iter()),
        rule,
    )
}

/// Compare the regime-tagged halves of a single combined scenario.
///
/// Untagged activities are left out.
#[must_use]
pub fn compare_regimes(scenario: &Scenario, rule: &MatchRule) -> Vec<ComparisonRow> {
    let side = |regime: Regime| {
        named_values(
            scenario,
            scenario
                .activities()
                .iter()
                .filter(move |a| a.regime == Some(regime)),
        )
    };
    compare_values(&side(Regime::SelfManaged), &side(Regime::Concession), rule)
}
