//! Internal Rate of Return via Newton-Raphson
//!
//! The IRR is the discount rate at which the NPV of a cash-flow series is
//! zero. Non-convergence is signalled with NaN rather than an error so it
//! composes with the rest of the sentinel-based numeric API.

use super::npv::npv_and_derivative;

/// Default initial guess: 10% as a decimal rate
pub const DEFAULT_IRR_GUESS: f64 = 0.10;

const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: u32 = 1000;

/// IRR of a cash-flow series, as a percentage
///
/// Uses the default 10% initial guess. Returns NaN when the solver fails
/// to converge; see [`irr_with_guess`].
pub fn irr(cash_flows: &[f64]) -> f64 {
    irr_with_guess(cash_flows, DEFAULT_IRR_GUESS)
}

/// IRR of a cash-flow series from a caller-supplied decimal guess
///
/// Newton-Raphson on NPV with the analytic derivative: the rate estimate
/// moves by `npv / dnpv` each step and iteration stops when consecutive
/// estimates differ by less than 1e-6, returning the rate as a percentage.
///
/// The series must contain at least one sign change for a real solution
/// to exist; this is not validated. Multiple sign changes can admit
/// multiple valid IRRs, and which one Newton-Raphson finds depends on the
/// guess. A vanishing derivative propagates NaN through subsequent
/// iterations and falls out at the 1000-iteration cap, which bounds
/// worst-case latency and guarantees termination.
pub fn irr_with_guess(cash_flows: &[f64], guess: f64) -> f64 {
    let mut rate = guess;

    for _ in 0..MAX_ITERATIONS {
        let (npv, dnpv) = npv_and_derivative(cash_flows, rate);
        let new_rate = rate - npv / dnpv;

        if (new_rate - rate).abs() < TOLERANCE {
            return new_rate * 100.0;
        }

        rate = new_rate;
    }

    f64::NAN
}
