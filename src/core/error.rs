use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("match rate must be a fraction between 0 and 1, got {0}")]
    MatchRateOutOfRange(f64),

    #[error("vesting period must be at least one year, got {0}")]
    InvalidVestingPeriod(i64),

    #[error("{scenario} growth rate must be finite and greater than -100%, got {rate}")]
    InvalidGrowthRate { scenario: &'static str, rate: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("{0} series has no records")]
    Empty(&'static str),

    #[error("{series} series years must be strictly increasing ({previous} is followed by {year})")]
    NotIncreasing {
        series: &'static str,
        previous: i32,
        year: i32,
    },

    #[error("{series} series has a non-positive or non-finite value {value} in {year}")]
    InvalidValue {
        series: &'static str,
        year: i32,
        value: f64,
    },
}
