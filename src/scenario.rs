//! Batch sweeps across rate grids
//!
//! The calculations are pure, so grid points are embarrassingly parallel
//! and evaluated with rayon.

use crate::cashflow::npv;
use crate::tvm::{loan_payment, LoanParams};
use rayon::prelude::*;

/// NPV of a cash-flow series at each discount rate in `rates_percent`
///
/// Useful for plotting an NPV profile and eyeballing where it crosses
/// zero (the IRR), particularly for series with multiple sign changes
/// where Newton-Raphson may land on only one of several roots.
pub fn npv_profile(cash_flows: &[f64], rates_percent: &[f64]) -> Vec<(f64, f64)> {
    rates_percent
        .par_iter()
        .map(|&rate| (rate, npv(cash_flows, rate)))
        .collect()
}

/// Monthly loan payment at each annual rate in `rates_percent`
pub fn loan_payment_grid(
    principal: f64,
    term_years: f64,
    rates_percent: &[f64],
) -> Vec<(f64, f64)> {
    rates_percent
        .par_iter()
        .map(|&rate| {
            let payment = loan_payment(&LoanParams::new(principal, rate, term_years));
            (rate, payment)
        })
        .collect()
}

/// Evenly spaced rate grid from `start` to `end` inclusive, in percent
pub fn rate_grid(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start];
    }

    let width = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + width * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profile_preserves_grid_order() {
        let flows = [-100.0, 110.0];
        let rates = rate_grid(0.0, 20.0, 5);
        let profile = npv_profile(&flows, &rates);

        assert_eq!(profile.len(), 5);
        for (point, rate) in profile.iter().zip(&rates) {
            assert_eq!(point.0, *rate);
        }
        // NPV declines as the discount rate rises for this series
        assert!(profile.first().unwrap().1 > profile.last().unwrap().1);
    }

    #[test]
    fn test_profile_crosses_zero_at_irr() {
        let flows = [-100.0, 110.0];
        let profile = npv_profile(&flows, &[10.0]);
        assert_relative_eq!(profile[0].1, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_payment_grid_monotonic_in_rate() {
        let grid = loan_payment_grid(10_000.0, 1.0, &rate_grid(0.0, 24.0, 7));
        for pair in grid.windows(2) {
            assert!(pair[1].1 > pair[0].1);
        }
    }

    #[test]
    fn test_rate_grid_endpoints() {
        let grid = rate_grid(2.0, 10.0, 5);
        assert_eq!(grid, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }
}
