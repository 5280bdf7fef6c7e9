use serde::Serialize;

use super::error::ConfigError;

pub const DEFAULT_MATCH_RATE: f64 = 0.25;
pub const DEFAULT_VESTING_PERIOD: u32 = 5;
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;
pub const MAX_PROJECTION_YEARS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    pub year: i32,
    pub close_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub match_rate: f64,
    pub vesting_period: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            match_rate: DEFAULT_MATCH_RATE,
            vesting_period: DEFAULT_VESTING_PERIOD,
        }
    }
}

impl SimulationConfig {
    pub fn new(match_rate: f64, vesting_period: u32) -> Result<Self, ConfigError> {
        validate_match_rate(match_rate)?;
        if vesting_period == 0 {
            return Err(ConfigError::InvalidVestingPeriod(0));
        }
        Ok(Self {
            match_rate,
            vesting_period,
        })
    }

    /// Applies a parameter change where the match rate is given in percent.
    /// Missing or non-finite values keep the current setting.
    pub fn apply_update(
        &mut self,
        match_rate_percent: Option<f64>,
        vesting_period: Option<i64>,
    ) -> Result<(), ConfigError> {
        let mut next = *self;
        if let Some(percent) = match_rate_percent.filter(|v| v.is_finite()) {
            let rate = percent / 100.0;
            validate_match_rate(rate)?;
            next.match_rate = rate;
        }
        if let Some(years) = vesting_period {
            next.vesting_period = u32::try_from(years)
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::InvalidVestingPeriod(years))?;
        }
        *self = next;
        Ok(())
    }
}

fn validate_match_rate(rate: f64) -> Result<(), ConfigError> {
    if rate.is_finite() && (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(ConfigError::MatchRateOutOfRange(rate))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRates {
    pub conservative: f64,
    pub base: f64,
    pub aggressive: f64,
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self {
            conservative: 0.04,
            base: 0.07,
            aggressive: 0.10,
        }
    }
}

impl GrowthRates {
    pub fn new(conservative: f64, base: f64, aggressive: f64) -> Result<Self, ConfigError> {
        for (scenario, rate) in [
            ("conservative", conservative),
            ("base", base),
            ("aggressive", aggressive),
        ] {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(ConfigError::InvalidGrowthRate { scenario, rate });
            }
        }
        Ok(Self {
            conservative,
            base,
            aggressive,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub horizon_years: u32,
    pub rates: GrowthRates,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_PROJECTION_YEARS,
            rates: GrowthRates::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub year: i32,
    pub unit_price: f64,
    pub contribution_this_year: f64,
    pub cumulative_contributed: f64,
    pub employee_shares_this_year: f64,
    pub cumulative_employee_shares: f64,
    pub match_awarded_this_year: f64,
    pub cumulative_match_awarded: f64,
    pub cumulative_match_shares: f64,
    pub employee_value: f64,
    pub match_value: f64,
    pub total_value: f64,
    pub benchmark_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalPosition {
    pub year: i32,
    pub cumulative_contributed: f64,
    pub cumulative_employee_shares: f64,
    pub cumulative_match_awarded: f64,
    pub cumulative_match_shares: f64,
    pub total_value: f64,
    pub benchmark_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub years: Vec<i32>,
    pub cumulative_invested: Vec<f64>,
    pub employee_value: Vec<f64>,
    pub total_value: Vec<f64>,
    pub benchmark_value: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub(crate) fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_for(&self, year: i32) -> Option<&LedgerEntry> {
        self.entries.iter().find(|entry| entry.year == year)
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    pub fn final_position(&self) -> Option<FinalPosition> {
        self.entries.last().map(|entry| FinalPosition {
            year: entry.year,
            cumulative_contributed: entry.cumulative_contributed,
            cumulative_employee_shares: entry.cumulative_employee_shares,
            cumulative_match_awarded: entry.cumulative_match_awarded,
            cumulative_match_shares: entry.cumulative_match_shares,
            total_value: entry.total_value,
            benchmark_value: entry.benchmark_value,
        })
    }

    pub fn chart_series(&self) -> ChartSeries {
        let mut series = ChartSeries::default();
        for entry in &self.entries {
            series.years.push(entry.year);
            series.cumulative_invested.push(entry.cumulative_contributed);
            series.employee_value.push(entry.employee_value);
            series.total_value.push(entry.total_value);
            series.benchmark_value.push(entry.benchmark_value);
        }
        series
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: i32,
    pub conservative_value: f64,
    pub base_value: f64,
    pub aggressive_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub years_simulated: usize,
    pub total_invested: f64,
    pub final_value: f64,
    pub benchmark_final_value: f64,
    pub roi_percent: f64,
    pub cagr_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_config_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.match_rate, 0.25);
        assert_eq!(config.vesting_period, 5);
    }

    #[test]
    fn simulation_config_rejects_out_of_domain_values() {
        assert_eq!(
            SimulationConfig::new(1.5, 5),
            Err(ConfigError::MatchRateOutOfRange(1.5))
        );
        assert!(SimulationConfig::new(f64::NAN, 5).is_err());
        assert_eq!(
            SimulationConfig::new(0.25, 0),
            Err(ConfigError::InvalidVestingPeriod(0))
        );
        assert!(SimulationConfig::new(1.0, 1).is_ok());
    }

    #[test]
    fn apply_update_keeps_current_values_for_missing_input() {
        let mut config = SimulationConfig::default();
        config.apply_update(None, None).expect("no-op update");
        assert_eq!(config, SimulationConfig::default());

        config
            .apply_update(Some(f64::NAN), Some(7))
            .expect("NaN rate is ignored");
        assert_eq!(config.match_rate, 0.25);
        assert_eq!(config.vesting_period, 7);

        config.apply_update(Some(40.0), None).expect("valid rate");
        assert!((config.match_rate - 0.4).abs() < 1e-12);
    }

    #[test]
    fn apply_update_is_all_or_nothing() {
        let mut config = SimulationConfig::default();
        let err = config
            .apply_update(Some(50.0), Some(-2))
            .expect_err("negative vesting");
        assert_eq!(err, ConfigError::InvalidVestingPeriod(-2));
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn growth_rates_reject_total_loss() {
        let err = GrowthRates::new(0.02, -1.0, 0.1).expect_err("-100% is out of domain");
        assert!(err.to_string().contains("base"));
        assert!(GrowthRates::new(-0.5, 0.0, 3.0).is_ok());
    }
}
