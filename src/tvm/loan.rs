//! Loan payment and amortization schedule (Price/French system)

use serde::{Deserialize, Serialize};

/// Inputs for a fixed-payment loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParams {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage
    pub rate: f64,

    /// Loan term in years
    pub term_years: f64,
}

impl LoanParams {
    pub fn new(principal: f64, rate: f64, term_years: f64) -> Self {
        Self {
            principal,
            rate,
            term_years,
        }
    }

    fn monthly_rate(&self) -> f64 {
        self.rate / 100.0 / 12.0
    }

    fn num_payments(&self) -> f64 {
        self.term_years * 12.0
    }
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number, 1-based
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal_paid: f64,
    /// Outstanding balance after this payment
    pub balance: f64,
}

/// Fixed monthly payment under Price-system amortization
///
/// `payment = P * r * (1+r)^n / ((1+r)^n - 1)` with monthly rate `r` and
/// `n` monthly payments. Zero rate falls back to straight-line `P / n`.
pub fn loan_payment(params: &LoanParams) -> f64 {
    let r = params.monthly_rate();
    let n = params.num_payments();

    if r.abs() < 1e-10 {
        return params.principal / n;
    }

    let factor = (1.0 + r).powf(n);
    params.principal * r * factor / (factor - 1.0)
}

/// Full month-by-month amortization schedule
///
/// Each payment blends interest on the outstanding balance with principal
/// repayment; the balance reaches zero (within rounding) at term end.
pub fn amortization_schedule(params: &LoanParams) -> Vec<AmortizationRow> {
    let payment = loan_payment(params);
    let r = params.monthly_rate();
    let n = params.num_payments().round() as u32;

    let mut rows = Vec::with_capacity(n as usize);
    let mut balance = params.principal;

    for month in 1..=n {
        let interest = balance * r;
        let principal_paid = payment - interest;
        balance -= principal_paid;

        rows.push(AmortizationRow {
            month,
            payment,
            interest,
            principal_paid,
            balance,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_payment() {
        // $10,000 at 12% for 1 year -> $888.49/month (standard Price system)
        let payment = loan_payment(&LoanParams::new(10_000.0, 12.0, 1.0));
        assert_relative_eq!(payment, 888.49, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = loan_payment(&LoanParams::new(12_000.0, 0.0, 2.0));
        assert_eq!(payment, 12_000.0 / 24.0);
    }

    #[test]
    fn test_payment_positive_and_finite() {
        for rate in [0.0, 3.5, 12.0, 24.0, 99.0] {
            for term in [0.5, 1.0, 15.0, 30.0] {
                let payment = loan_payment(&LoanParams::new(250_000.0, rate, term));
                assert!(payment.is_finite() && payment > 0.0);
            }
        }
    }

    #[test]
    fn test_schedule_retires_balance() {
        let params = LoanParams::new(200_000.0, 6.0, 30.0);
        let schedule = amortization_schedule(&params);

        assert_eq!(schedule.len(), 360);
        let last = schedule.last().unwrap();
        assert_relative_eq!(last.balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_schedule_rows_blend_to_payment() {
        let params = LoanParams::new(10_000.0, 12.0, 1.0);
        let payment = loan_payment(&params);

        for row in amortization_schedule(&params) {
            assert_relative_eq!(row.interest + row.principal_paid, payment, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_interest_share_declines() {
        let schedule = amortization_schedule(&LoanParams::new(100_000.0, 8.0, 10.0));
        for pair in schedule.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
        }
    }
}
