pub mod data;
mod engine;
mod error;
mod metrics;
mod projection;
mod schedule;
mod series;
mod session;
mod types;

pub use engine::run_simulation;
pub use error::{ConfigError, SeriesError};
pub use metrics::{cagr, roi, summarize};
pub use projection::project;
pub use schedule::{ContributionSchedule, sanitize_amount};
pub use series::{BenchmarkSeries, PriceSeries};
pub use session::{Report, Session};
pub use types::{
    BenchmarkRecord, ChartSeries, DEFAULT_MATCH_RATE, DEFAULT_PROJECTION_YEARS,
    DEFAULT_VESTING_PERIOD, FinalPosition, GrowthRates, Ledger, LedgerEntry, MAX_PROJECTION_YEARS,
    ProjectionConfig, ProjectionPoint, SimulationConfig, Summary, YearRecord,
};
