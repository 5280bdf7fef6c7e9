use super::error::SeriesError;
use super::types::{BenchmarkRecord, YearRecord};

const PRICE_SERIES: &str = "price";
const BENCHMARK_SERIES: &str = "benchmark";

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    records: Vec<YearRecord>,
}

impl PriceSeries {
    pub fn new(records: Vec<YearRecord>) -> Result<Self, SeriesError> {
        validate(
            PRICE_SERIES,
            records.iter().map(|r| (r.year, r.unit_price)),
        )?;
        Ok(Self { records })
    }

    pub fn from_pairs(pairs: &[(i32, f64)]) -> Result<Self, SeriesError> {
        Self::new(
            pairs
                .iter()
                .map(|&(year, unit_price)| YearRecord { year, unit_price })
                .collect(),
        )
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().map(|r| r.year)
    }

    pub fn first_year(&self) -> i32 {
        self.records[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.records[self.records.len() - 1].year
    }

    pub fn exact_price(&self, year: i32) -> Option<f64> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|idx| self.records[idx].unit_price)
    }

    /// Price for `year`, forward-filled from the latest earlier record. Years
    /// before the series start resolve to the final price in the series.
    pub fn price_at(&self, year: i32) -> f64 {
        match self.records.binary_search_by_key(&year, |r| r.year) {
            Ok(idx) => self.records[idx].unit_price,
            Err(0) => self.records[self.records.len() - 1].unit_price,
            Err(idx) => self.records[idx - 1].unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSeries {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkSeries {
    pub fn new(records: Vec<BenchmarkRecord>) -> Result<Self, SeriesError> {
        validate(
            BENCHMARK_SERIES,
            records.iter().map(|r| (r.year, r.close_value)),
        )?;
        Ok(Self { records })
    }

    pub fn from_pairs(pairs: &[(i32, f64)]) -> Result<Self, SeriesError> {
        Self::new(
            pairs
                .iter()
                .map(|&(year, close_value)| BenchmarkRecord { year, close_value })
                .collect(),
        )
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn close_at(&self, year: i32) -> Option<f64> {
        self.position(year).map(|idx| self.records[idx].close_value)
    }

    fn position(&self, year: i32) -> Option<usize> {
        self.records.binary_search_by_key(&year, |r| r.year).ok()
    }
}

fn validate(
    series: &'static str,
    points: impl Iterator<Item = (i32, f64)>,
) -> Result<(), SeriesError> {
    let mut previous: Option<i32> = None;
    let mut seen = false;
    for (year, value) in points {
        seen = true;
        if !value.is_finite() || value <= 0.0 {
            return Err(SeriesError::InvalidValue {
                series,
                year,
                value,
            });
        }
        if let Some(prev) = previous {
            if year <= prev {
                return Err(SeriesError::NotIncreasing {
                    series,
                    previous: prev,
                    year,
                });
            }
        }
        previous = Some(year);
    }
    if !seen {
        return Err(SeriesError::Empty(series));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_at_forward_fills_missing_years() {
        let prices = PriceSeries::from_pairs(&[(2012, 4.46), (2014, 9.41), (2017, 13.60)])
            .expect("valid series");

        assert_eq!(prices.price_at(2012), 4.46);
        assert_eq!(prices.price_at(2013), 4.46);
        assert_eq!(prices.price_at(2016), 9.41);
        assert_eq!(prices.price_at(2030), 13.60);
        assert_eq!(prices.exact_price(2013), None);
    }

    #[test]
    fn price_at_before_series_start_uses_last_known_price() {
        let prices = PriceSeries::from_pairs(&[(2012, 4.46), (2013, 6.52)]).expect("valid series");
        assert_eq!(prices.price_at(2005), 6.52);
    }

    #[test]
    fn close_at_only_matches_exact_years() {
        let bench = BenchmarkSeries::from_pairs(&[(2012, 100.0), (2013, 110.0), (2015, 121.0)])
            .expect("valid series");

        assert_eq!(bench.close_at(2012), Some(100.0));
        assert_eq!(bench.close_at(2015), Some(121.0));
        assert_eq!(bench.close_at(2014), None);
        assert_eq!(bench.close_at(2030), None);
    }

    #[test]
    fn rejects_empty_series() {
        let err = PriceSeries::new(Vec::new()).expect_err("must reject empty series");
        assert_eq!(err, SeriesError::Empty("price"));
    }

    #[test]
    fn rejects_unordered_years() {
        let err = BenchmarkSeries::from_pairs(&[(2013, 1.0), (2013, 2.0)])
            .expect_err("must reject duplicate year");
        assert!(matches!(err, SeriesError::NotIncreasing { year: 2013, .. }));
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = PriceSeries::from_pairs(&[(2012, 0.0)]).expect_err("must reject zero price");
        assert!(err.to_string().contains("2012"));

        let err = BenchmarkSeries::from_pairs(&[(2012, f64::NAN)])
            .expect_err("must reject NaN close");
        assert!(matches!(err, SeriesError::InvalidValue { .. }));
    }
}
