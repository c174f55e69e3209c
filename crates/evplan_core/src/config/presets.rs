//! Built-in park scenarios
//!
//! `self-managed` and `concession` carry future flows at the end of each
//! horizon, discounted at 6%. `park-combined` carries present values for both
//! regimes side by side, with a synthetic master decision at bit 0.

use crate::config::{ActivityBuilder, ScenarioBuilder};
use crate::error::Result;
use crate::model::Scenario;

pub const SELF_MANAGED: &str = "self-managed";
pub const CONCESSION: &str = "concession";
pub const PARK_COMBINED: &str = "park-combined";

pub const PRESET_NAMES: [&str; 3] = [SELF_MANAGED, CONCESSION, PARK_COMBINED];

/// Master decision of the combined scenario (1 = concession for everything)
pub const COMBINED_MASTER_KEY: &str = "concession_for_everything";

const REGIME_DISCOUNT_RATE: f64 = 0.06;

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<Result<Scenario>> {
    match name {
        SELF_MANAGED => Some(self_managed()),
        CONCESSION => Some(concession()),
        PARK_COMBINED => Some(park_combined()),
        _ => None,
    }
}

type OutcomeRow = (&'static str, f64, f64);

fn activity(name: &str, key: &str, horizon: u32, outcomes: &[OutcomeRow]) -> ActivityBuilder {
    outcomes.iter().fold(
        ActivityBuilder::new(name, key).horizon_years(horizon),
        |builder, &(label, probability, value)| builder.outcome(label, probability, value),
    )
}

/// Park run entirely by its own staff
pub fn self_managed() -> Result<Scenario> {
    ScenarioBuilder::new("Self-managed")
        .discount_rate(REGIME_DISCOUNT_RATE)
        .future_flows()
        .activity(activity(
            "Alojamiento (Lodge)",
            "lodge",
            2,
            &[
                ("High success", 0.10, 44_196_428.6),
                ("Moderate success", 0.30, 15_642_857.1),
                ("Failure", 0.60, 7_821_428.57),
            ],
        ))
        .activity(activity(
            "Cabalgatas",
            "horse_riding",
            3,
            &[
                ("High demand", 0.30, -53_000_000.0),
                ("Regular demand", 0.40, -89_000_000.0),
                ("Low demand", 0.30, -110_600_000.0),
            ],
        ))
        .activity(activity(
            "Trekking",
            "trekking",
            2,
            &[
                ("High success", 0.20, 350_000_000.0),
                ("Moderate success", 0.50, 175_000_000.0),
                ("Failure", 0.30, 50_000_000.0),
            ],
        ))
        .activity(activity(
            "Mountain Bike",
            "mtb",
            3,
            &[
                ("Success", 0.35, 25_000_000.0),
                ("Neutral", 0.25, 12_500_000.0),
                ("Failure", 0.40, 6_250_000.0),
            ],
        ))
        .activity(activity(
            "Kayak",
            "kayak",
            2,
            &[
                ("Success", 0.25, 1_500_000.0),
                ("Neutral", 0.25, 750_000.0),
                ("Failure", 0.50, 250_000.0),
            ],
        ))
        .activity(activity(
            "Tours Guiados",
            "guided_tours",
            3,
            &[
                ("High demand", 0.25, 145_000_000.0),
                ("Moderate demand", 0.45, 72_500_000.0),
                ("Low demand", 0.30, 36_250_000.0),
            ],
        ))
        .activity(activity(
            "Jornadas de Educación",
            "education_days",
            2,
            &[
                ("Academic success", 0.40, 82_800_000.0),
                ("Regular turnout", 0.35, 41_400_000.0),
                ("Low turnout", 0.25, 27_600_000.0),
            ],
        ))
        .activity(activity(
            "Eventos Especiales",
            "special_events",
            2,
            &[
                ("Successful event", 0.30, 119_000_000.0),
                ("Regular event", 0.40, 59_000_000.0),
                ("Failed event", 0.30, 19_000_000.0),
            ],
        ))
        .activity(activity(
            "Arriendo de Espacios",
            "space_rental",
            4,
            &[
                ("High occupancy", 0.35, 45_000_000.0),
                ("Moderate occupancy", 0.45, 22_500_000.0),
                ("Low occupancy", 0.20, 11_250_000.0),
            ],
        ))
        .build()
}

/// Park with every activity handed to concessionaires
pub fn concession() -> Result<Scenario> {
    ScenarioBuilder::new("Concession")
        .discount_rate(REGIME_DISCOUNT_RATE)
        .future_flows()
        .activity(activity(
            "Alojamiento (Lodge)",
            "lodge",
            2,
            &[
                ("High success", 0.0625, 33_147_321.4),
                ("Moderate success", 0.0625, 11_732_142.9),
                ("Failure", 0.875, 5_866_071.43),
            ],
        ))
        .activity(activity(
            "Cabalgatas",
            "horse_riding",
            3,
            &[
                ("High demand", 0.1875, -39_750_000.0),
                ("Regular demand", 0.3125, -66_750_000.0),
                ("Low demand", 0.50, -82_950_000.0),
            ],
        ))
        .activity(activity(
            "Trekking",
            "trekking",
            2,
            &[
                ("High success", 0.25, 262_500_000.0),
                ("Moderate success", 0.4375, 131_250_000.0),
                ("Failure", 0.3125, 37_500_000.0),
            ],
        ))
        .activity(activity(
            "Mountain Bike",
            "mtb",
            3,
            &[
                ("Success", 0.1875, 18_750_000.0),
                ("Neutral", 0.3125, 9_375_000.0),
                ("Failure", 0.50, 4_687_500.0),
            ],
        ))
        .activity(activity(
            "Kayak",
            "kayak",
            2,
            &[
                ("Success", 0.25, 1_125_000.0),
                ("Neutral", 0.4375, 562_500.0),
                ("Failure", 0.3125, 187_500.0),
            ],
        ))
        .activity(activity(
            "Tours Guiados",
            "guided_tours",
            3,
            &[
                ("High demand", 0.25, 108_750_000.0),
                ("Moderate demand", 0.4375, 54_375_000.0),
                ("Low demand", 0.3125, 27_187_500.0),
            ],
        ))
        .activity(activity(
            "Jornadas de Educación",
            "education_days",
            2,
            &[
                ("Academic success", 0.1875, 62_100_000.0),
                ("Regular turnout", 0.3125, 31_050_000.0),
                ("Low turnout", 0.50, 20_700_000.0),
            ],
        ))
        .activity(activity(
            "Eventos Especiales",
            "special_events",
            2,
            &[
                ("Successful event", 0.125, 89_250_000.0),
                ("Regular event", 0.1875, 44_250_000.0),
                ("Failed event", 0.6875, 14_250_000.0),
            ],
        ))
        .activity(activity(
            "Arriendo de Espacios",
            "space_rental",
            4,
            &[
                ("High occupancy", 0.1875, 33_750_000.0),
                ("Moderate occupancy", 0.3125, 16_875_000.0),
                ("Low occupancy", 0.50, 8_437_500.0),
            ],
        ))
        .build()
}

/// Activities offered under both regimes in the combined scenario
const DUAL_REGIME: [(&str, &str, u32, &[OutcomeRow]); 9] = [
    (
        "Alojamiento (Lodge)",
        "lodge",
        2,
        &[("Success", 0.10, 100_000.0), ("Failure", 0.90, -10_000.0)],
    ),
    (
        "Cabalgatas",
        "horse_riding",
        3,
        &[("Success", 0.30, 15_000.0), ("Failure", 0.70, -60_000.0)],
    ),
    (
        "Trekking",
        "trekking",
        2,
        &[
            ("High success", 0.20, 25_000.0),
            ("Moderate success", 0.50, 8_000.0),
            ("Failure", 0.30, -12_000.0),
        ],
    ),
    (
        "Mountain Bike",
        "mtb",
        3,
        &[
            ("Success", 0.35, 30_000.0),
            ("Neutral", 0.25, 0.0),
            ("Failure", 0.40, -20_000.0),
        ],
    ),
    (
        "Kayak",
        "kayak",
        2,
        &[
            ("Success", 0.25, 18_000.0),
            ("Neutral", 0.25, 2_000.0),
            ("Failure", 0.50, -9_000.0),
        ],
    ),
    (
        "Tours Guiados",
        "guided_tours",
        3,
        &[
            ("High demand", 0.25, 35_000.0),
            ("Moderate demand", 0.45, 12_000.0),
            ("Low demand", 0.30, -8_000.0),
        ],
    ),
    (
        "Jornadas de Educación",
        "education_days",
        2,
        &[
            ("Academic success", 0.40, 20_000.0),
            ("Regular turnout", 0.35, 6_000.0),
            ("Low turnout", 0.25, -15_000.0),
        ],
    ),
    (
        "Eventos Especiales",
        "special_events",
        2,
        &[
            ("Successful event", 0.30, 28_000.0),
            ("Regular event", 0.40, 8_000.0),
            ("Failed event", 0.30, -12_000.0),
        ],
    ),
    (
        "Arriendo de Espacios",
        "space_rental",
        4,
        &[
            ("High occupancy", 0.35, 40_000.0),
            ("Moderate occupancy", 0.45, 15_000.0),
            ("Low occupancy", 0.20, -5_000.0),
        ],
    ),
];

/// Both regimes side by side, present values at 12%.
///
/// Each dual-regime activity appears twice ("- Propio" and "- Concesión"),
/// tagged with its regime; signage is only ever self-managed.
pub fn park_combined() -> Result<Scenario> {
    let builder = ScenarioBuilder::new("Park (combined)")
        .present_values()
        .master_key(COMBINED_MASTER_KEY);

    let builder = DUAL_REGIME
        .iter()
        .fold(builder, |builder, &(name, key, horizon, outcomes)| {
            builder
                .activity(
                    activity(&format!("{name} - Propio"), &format!("{key}_own"), horizon, outcomes)
                        .self_managed(),
                )
                .activity(
                    activity(
                        &format!("{name} - Concesión"),
                        &format!("{key}_concession"),
                        horizon,
                        outcomes,
                    )
                    .concession(),
                )
        });

    builder
        .activity(
            activity(
                "Señaléticas",
                "signage",
                1,
                &[("Benefit", 0.70, 5_000.0), ("Loss", 0.30, -5_000.0)],
            )
            .self_managed(),
        )
        .build()
}
