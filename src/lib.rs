//! Financial calculation engine
//!
//! This library provides:
//! - Time-value-of-money primitives (compound interest, annuities, loan amortization)
//! - Cash-flow analytics (NPV, Newton-Raphson IRR)
//! - Portfolio risk statistics (volatility, Sharpe ratio)
//! - Goal planning (retirement sizing, required savings)
//! - Recurring-transaction scheduling
//!
//! The numeric core is pure and stateless: every function takes plain
//! numbers or slices and returns numbers or small value records, with no
//! I/O and no shared state, so calls are freely concurrent. Degenerate
//! numeric conditions (division by zero, solver non-convergence) surface
//! as NaN/Infinity sentinels rather than errors; callers check
//! `is_finite()` before display.

pub mod cashflow;
pub mod planning;
pub mod portfolio;
pub mod recurrence;
pub mod scenario;
pub mod tvm;

// Re-export commonly used items
pub use cashflow::{irr, irr_with_guess, npv};
pub use planning::{monthly_savings_for_goal, retirement_goal};
pub use portfolio::{sharpe_ratio, volatility};
pub use recurrence::{Frequency, RecurringSchedule};
pub use tvm::{
    amortization_schedule, annuity_future_value, annuity_present_value, compound_interest,
    loan_payment, CompoundInterestParams, InvestmentGrowth, LoanParams,
};
