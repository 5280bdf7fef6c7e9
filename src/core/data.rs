use super::error::SeriesError;
use super::series::{BenchmarkSeries, PriceSeries};

/// Company stock closing price per year.
pub const COMPANY_STOCK_PRICES: [(i32, f64); 12] = [
    (2012, 4.46),
    (2013, 6.52),
    (2014, 9.41),
    (2015, 11.2),
    (2016, 12.13),
    (2017, 13.6),
    (2018, 13.28),
    (2019, 14.76),
    (2020, 19.7),
    (2021, 35.3),
    (2022, 43.72),
    (2023, 51.02),
];

/// S&P 500 close on April 30 of each year. Runs one year past the stock
/// prices so the final simulated year can still be compounded against.
pub const SP500_APRIL_CLOSES: [(i32, f64); 13] = [
    (2012, 1397.91),
    (2013, 1597.57),
    (2014, 1883.95),
    (2015, 2085.51),
    (2016, 2065.30),
    (2017, 2384.20),
    (2018, 2648.05),
    (2019, 2945.83),
    (2020, 2912.43),
    (2021, 4181.17),
    (2022, 4131.93),
    (2023, 4169.48),
    (2024, 5035.69),
];

pub fn default_price_series() -> Result<PriceSeries, SeriesError> {
    PriceSeries::from_pairs(&COMPANY_STOCK_PRICES)
}

pub fn default_benchmark_series() -> Result<BenchmarkSeries, SeriesError> {
    BenchmarkSeries::from_pairs(&SP500_APRIL_CLOSES)
}
