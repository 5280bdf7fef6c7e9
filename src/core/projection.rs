use super::types::{GrowthRates, ProjectionPoint};

/// Compounds `starting_value` forward for `horizon_years`, one point per year
/// including `start_year` itself, independently under each growth rate.
pub fn project(
    starting_value: f64,
    start_year: i32,
    horizon_years: u32,
    rates: &GrowthRates,
) -> Vec<ProjectionPoint> {
    let mut points = Vec::with_capacity(horizon_years as usize + 1);
    let mut conservative = starting_value;
    let mut base = starting_value;
    let mut aggressive = starting_value;

    for offset in 0..=horizon_years {
        points.push(ProjectionPoint {
            year: start_year.saturating_add_unsigned(offset),
            conservative_value: conservative,
            base_value: base,
            aggressive_value: aggressive,
        });
        conservative *= 1.0 + rates.conservative;
        base *= 1.0 + rates.base;
        aggressive *= 1.0 + rates.aggressive;
    }

    points
}
