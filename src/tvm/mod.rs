//! Time-value-of-money primitives: compound interest, annuities, loan amortization

mod compound;
mod annuity;
mod loan;

pub use compound::{compound_interest, CompoundInterestParams, InvestmentGrowth};
pub use annuity::{annuity_future_value, annuity_present_value};
pub use loan::{loan_payment, amortization_schedule, AmortizationRow, LoanParams};
