use super::schedule::ContributionSchedule;
use super::series::{BenchmarkSeries, PriceSeries};
use super::types::{Ledger, LedgerEntry, SimulationConfig};

#[derive(Debug, Default)]
struct Position {
    contributed: f64,
    employee_shares: f64,
    match_awarded: f64,
    match_shares: f64,
    benchmark_value: f64,
    benchmark_close: Option<f64>,
}

/// Replays the schedule year by year over the price series, crediting each
/// contribution's match `vesting_period` years later at that year's price and
/// shadowing the same cash flows in the benchmark index.
pub fn run_simulation(
    schedule: &ContributionSchedule,
    prices: &PriceSeries,
    benchmark: &BenchmarkSeries,
    config: &SimulationConfig,
) -> Ledger {
    let mut position = Position::default();
    let mut entries = Vec::with_capacity(prices.records().len());

    for (idx, year) in prices.years().enumerate() {
        let unit_price = prices.price_at(year);
        let contribution = schedule.get(year);

        let employee_shares = if contribution > 0.0 {
            contribution / unit_price
        } else {
            0.0
        };
        position.employee_shares += employee_shares;
        position.contributed += contribution;

        let match_awarded = vested_match(schedule, year, config);
        position.match_awarded += match_awarded;
        position.match_shares += match_awarded / unit_price;

        let close = benchmark.close_at(year);
        position.benchmark_value = if idx == 0 {
            contribution
        } else {
            next_benchmark_value(
                position.benchmark_value,
                contribution,
                position.benchmark_close,
                close,
            )
        };
        if close.is_some() {
            position.benchmark_close = close;
        }

        let employee_value = position.employee_shares * unit_price;
        let match_value = position.match_shares * unit_price;

        entries.push(LedgerEntry {
            year,
            unit_price,
            contribution_this_year: contribution,
            cumulative_contributed: position.contributed,
            employee_shares_this_year: employee_shares,
            cumulative_employee_shares: position.employee_shares,
            match_awarded_this_year: match_awarded,
            cumulative_match_awarded: position.match_awarded,
            cumulative_match_shares: position.match_shares,
            employee_value,
            match_value,
            total_value: employee_value + match_value,
            benchmark_value: position.benchmark_value,
        });
    }

    Ledger::from_entries(entries)
}

fn vested_match(schedule: &ContributionSchedule, year: i32, config: &SimulationConfig) -> f64 {
    let source = i64::from(year) - i64::from(config.vesting_period);
    match i32::try_from(source) {
        Ok(source_year) if schedule.contains(source_year) => {
            schedule.get(source_year) * config.match_rate
        }
        _ => 0.0,
    }
}

// Growth runs from the close of the latest simulated year that had one, so
// gaps in the price series still pick up the index moves in between. A zero
// running value restarts at the new contribution, even after a gap of
// zero-contribution years.
fn next_benchmark_value(
    previous: f64,
    contribution: f64,
    last_close: Option<f64>,
    close: Option<f64>,
) -> f64 {
    if previous == 0.0 && contribution > 0.0 {
        return contribution;
    }
    match (last_close, close) {
        (Some(from), Some(to)) => (previous + contribution) * (to / from),
        _ => previous + contribution,
    }
}
