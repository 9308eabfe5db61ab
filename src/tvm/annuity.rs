//! Ordinary annuity present and future value

/// Future value of an ordinary annuity
///
/// `payment` per period for `periods` periods at `rate_percent` per period.
/// Zero rate is a valid degenerate case: `payment * periods`.
pub fn annuity_future_value(payment: f64, rate_percent: f64, periods: f64) -> f64 {
    let r = rate_percent / 100.0;
    if r.abs() < 1e-10 {
        return payment * periods;
    }

    payment * ((1.0 + r).powf(periods) - 1.0) / r
}

/// Present value of an ordinary annuity
///
/// Zero rate degenerates to `payment * periods`.
pub fn annuity_present_value(payment: f64, rate_percent: f64, periods: f64) -> f64 {
    let r = rate_percent / 100.0;
    if r.abs() < 1e-10 {
        return payment * periods;
    }

    payment * (1.0 - (1.0 + r).powf(-periods)) / r
}
