//! Compound interest projection

use serde::{Deserialize, Serialize};

/// Default compounding frequency (monthly)
fn default_compounding_frequency() -> u32 {
    12
}

/// Inputs for a compound interest projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestParams {
    /// Initial amount invested
    pub principal: f64,

    /// Annual interest rate as a percentage (e.g., 10.0 for 10%)
    pub rate: f64,

    /// Investment horizon in years
    pub time_years: f64,

    /// Compounding periods per year (12 = monthly)
    #[serde(default = "default_compounding_frequency")]
    pub compounding_frequency: u32,
}

impl CompoundInterestParams {
    /// Monthly-compounded parameters
    pub fn monthly(principal: f64, rate: f64, time_years: f64) -> Self {
        Self {
            principal,
            rate,
            time_years,
            compounding_frequency: 12,
        }
    }
}

/// Result of a compound interest projection
///
/// All fields are derived from the inputs. With `principal = 0` the
/// percentage fields are NaN rather than an error; callers check
/// `is_finite()` before display. `time_years = 0` puts Infinity in the
/// annualization exponent, which IEEE-754 pow collapses to an annualized
/// return of zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InvestmentGrowth {
    /// Value at the end of the horizon
    pub final_amount: f64,

    /// Absolute gain over the principal
    pub total_return: f64,

    /// Gain as a percentage of the principal
    pub total_return_percentage: f64,

    /// Geometric annual return as a percentage
    pub annualized_return: f64,
}

/// Project principal growth under periodic compounding
///
/// `final = principal * (1 + rate/100/freq)^(freq * years)`
pub fn compound_interest(params: &CompoundInterestParams) -> InvestmentGrowth {
    let freq = params.compounding_frequency as f64;
    let period_rate = params.rate / 100.0 / freq;

    let final_amount = params.principal * (1.0 + period_rate).powf(freq * params.time_years);
    let total_return = final_amount - params.principal;
    let total_return_percentage = total_return / params.principal * 100.0;
    let annualized_return =
        ((final_amount / params.principal).powf(1.0 / params.time_years) - 1.0) * 100.0;

    InvestmentGrowth {
        final_amount,
        total_return,
        total_return_percentage,
        annualized_return,
    }
}
