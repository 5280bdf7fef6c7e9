use std::collections::BTreeMap;

use tracing::debug;

use super::series::PriceSeries;

/// Per-year employee contributions. Keys are fixed to the years of the price
/// series the schedule was created from; amounts are always finite and >= 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionSchedule {
    amounts: BTreeMap<i32, f64>,
}

impl ContributionSchedule {
    pub fn for_years(years: impl IntoIterator<Item = i32>) -> Self {
        Self {
            amounts: years.into_iter().map(|year| (year, 0.0)).collect(),
        }
    }

    pub fn for_series(prices: &PriceSeries) -> Self {
        Self::for_years(prices.years())
    }

    /// Stores `amount` for `year`, coercing non-finite or negative input to 0.
    /// Returns `false` and leaves the schedule untouched for unknown years.
    pub fn set(&mut self, year: i32, amount: f64) -> bool {
        match self.amounts.get_mut(&year) {
            Some(slot) => {
                *slot = coerce_amount(amount);
                true
            }
            None => {
                debug!(year, "ignoring contribution for a year outside the schedule");
                false
            }
        }
    }

    pub fn set_raw(&mut self, year: i32, raw: &str) -> bool {
        self.set(year, sanitize_amount(raw))
    }

    pub fn apply_forward(&mut self, start_year: i32, amount: f64) {
        let amount = coerce_amount(amount);
        for (_, slot) in self.amounts.range_mut(start_year..) {
            *slot = amount;
        }
    }

    pub fn clear(&mut self) {
        for slot in self.amounts.values_mut() {
            *slot = 0.0;
        }
    }

    pub fn get(&self, year: i32) -> f64 {
        self.amounts.get(&year).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.amounts.contains_key(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.amounts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.amounts.iter().map(|(&year, &amount)| (year, amount))
    }

    pub fn total(&self) -> f64 {
        self.amounts.values().sum()
    }
}

fn coerce_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Parses user-typed amounts such as `"$12,500"`. Anything that is not a
/// finite, non-negative number becomes 0.
pub fn sanitize_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().map(coerce_amount).unwrap_or(0.0)
}
