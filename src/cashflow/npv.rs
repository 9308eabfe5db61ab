//! Net Present Value of an ordered cash-flow series

/// Net present value at an annual discount rate given in percent
///
/// `NPV = Σ cf[i] / (1+r)^i` with `r = discount_rate_percent / 100`.
/// Index 0 is the period-0 flow and is not discounted. Order is
/// semantically significant: index = period number.
pub fn npv(cash_flows: &[f64], discount_rate_percent: f64) -> f64 {
    let r = discount_rate_percent / 100.0;
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf / (1.0 + r).powi(i as i32))
        .sum()
}

/// NPV and its analytic derivative with respect to the decimal rate
///
/// `dNPV/dr = Σ -i * cf[i] / (1+r)^(i+1)`. This is the objective function
/// and gradient used by the Newton-Raphson IRR solver; the rate here is a
/// decimal, not a percent.
pub fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (i, &cf) in cash_flows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(i as i32);
        if i > 0 {
            dnpv -= (i as f64) * cf / (1.0 + rate).powi(i as i32 + 1);
        }
    }

    (npv, dnpv)
}
