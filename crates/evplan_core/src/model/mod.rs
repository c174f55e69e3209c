mod activity;
mod ids;
mod results;
mod scenario;

pub use activity::{Activity, Outcome, Regime};
pub use ids::DecisionKey;
pub use results::{
    BetterOption, CombinationResult, ComparisonRow, StrategySummary, TornadoRow,
};
pub use scenario::{DEFAULT_DISCOUNT_RATE, DecisionSlot, Scenario, ValueConvention};
