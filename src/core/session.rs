use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::engine::run_simulation;
use super::metrics::summarize;
use super::projection::project;
use super::schedule::ContributionSchedule;
use super::series::{BenchmarkSeries, PriceSeries};
use super::types::{
    ChartSeries, FinalPosition, Ledger, ProjectionConfig, ProjectionPoint, SimulationConfig,
    Summary,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub ledger: Ledger,
    pub chart: ChartSeries,
    pub final_position: Option<FinalPosition>,
    pub summary: Summary,
    pub projection: Vec<ProjectionPoint>,
}

/// One user's working state: the editable schedule plus the parameters every
/// recompute runs with. Reference series are shared read-only.
#[derive(Debug, Clone)]
pub struct Session {
    prices: Arc<PriceSeries>,
    benchmark: Arc<BenchmarkSeries>,
    schedule: ContributionSchedule,
    pub simulation: SimulationConfig,
    pub projection: ProjectionConfig,
}

impl Session {
    pub fn new(prices: Arc<PriceSeries>, benchmark: Arc<BenchmarkSeries>) -> Self {
        let schedule = ContributionSchedule::for_series(&prices);
        Self {
            prices,
            benchmark,
            schedule,
            simulation: SimulationConfig::default(),
            projection: ProjectionConfig::default(),
        }
    }

    pub fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    pub fn benchmark(&self) -> &BenchmarkSeries {
        &self.benchmark
    }

    pub fn schedule(&self) -> &ContributionSchedule {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut ContributionSchedule {
        &mut self.schedule
    }

    pub fn simulate(&self) -> Ledger {
        let snapshot = self.schedule.clone();
        run_simulation(&snapshot, &self.prices, &self.benchmark, &self.simulation)
    }

    /// Full recompute: ledger, summary metrics and the forward projection
    /// starting from the last simulated year's total value.
    pub fn recompute(&self) -> Report {
        let ledger = self.simulate();
        let summary = summarize(&ledger);
        let start_year = ledger
            .last()
            .map(|e| e.year)
            .unwrap_or_else(|| self.prices.last_year());
        let projection = project(
            summary.final_value,
            start_year,
            self.projection.horizon_years,
            &self.projection.rates,
        );

        debug!(
            years = summary.years_simulated,
            invested = summary.total_invested,
            final_value = summary.final_value,
            projection_points = projection.len(),
            "recomputed session"
        );

        Report {
            chart: ledger.chart_series(),
            final_position: ledger.final_position(),
            ledger,
            summary,
            projection,
        }
    }
}
