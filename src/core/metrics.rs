use super::types::{Ledger, Summary};

/// Return on investment in percent. Yields 0 when nothing was invested.
pub fn roi(total_invested: f64, final_value: f64) -> f64 {
    if total_invested > 0.0 {
        (final_value - total_invested) / total_invested * 100.0
    } else {
        0.0
    }
}

/// Compound annual growth rate in percent over `years_elapsed` simulated
/// years. Yields 0 when nothing was invested or no years elapsed.
pub fn cagr(total_invested: f64, final_value: f64, years_elapsed: usize) -> f64 {
    if total_invested > 0.0 && years_elapsed > 0 {
        ((final_value / total_invested).powf(1.0 / years_elapsed as f64) - 1.0) * 100.0
    } else {
        0.0
    }
}

pub fn summarize(ledger: &Ledger) -> Summary {
    let years_simulated = ledger.len();
    let (total_invested, final_value, benchmark_final_value) = ledger
        .last()
        .map(|e| (e.cumulative_contributed, e.total_value, e.benchmark_value))
        .unwrap_or((0.0, 0.0, 0.0));

    Summary {
        years_simulated,
        total_invested,
        final_value,
        benchmark_final_value,
        roi_percent: roi(total_invested, final_value),
        cagr_percent: cagr(total_invested, final_value, years_simulated),
    }
}
