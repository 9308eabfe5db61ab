//! Goal planning: retirement sizing and required savings

/// Default annual inflation assumption, percent
pub const DEFAULT_INFLATION_RATE: f64 = 3.0;

/// Default safe withdrawal rate, percent (the 4% rule)
pub const DEFAULT_WITHDRAWAL_RATE: f64 = 4.0;

/// Default expected annual return on invested savings, percent
pub const DEFAULT_ANNUAL_RETURN: f64 = 8.0;

/// Nest egg required to retire, using the default inflation and
/// withdrawal assumptions
pub fn retirement_goal(current_age: f64, retirement_age: f64, monthly_expenses: f64) -> f64 {
    retirement_goal_with(
        current_age,
        retirement_age,
        monthly_expenses,
        DEFAULT_INFLATION_RATE,
        DEFAULT_WITHDRAWAL_RATE,
    )
}

/// Nest egg required to retire
///
/// Inflates today's monthly expenses to retirement age, annualizes, and
/// divides by the withdrawal rate:
/// `expenses * (1 + infl/100)^years * 12 / (withdrawal/100)`.
/// A zero withdrawal rate yields Infinity (you can never draw down), in
/// keeping with the sentinel contract of the rest of the crate.
pub fn retirement_goal_with(
    current_age: f64,
    retirement_age: f64,
    monthly_expenses: f64,
    inflation_rate_percent: f64,
    withdrawal_rate_percent: f64,
) -> f64 {
    let years = retirement_age - current_age;
    let inflated_monthly = monthly_expenses * (1.0 + inflation_rate_percent / 100.0).powf(years);

    inflated_monthly * 12.0 / (withdrawal_rate_percent / 100.0)
}

/// Monthly savings needed to reach a target, at the default expected return
pub fn monthly_savings_for_goal(target_amount: f64, years: f64) -> f64 {
    monthly_savings_for_goal_with(target_amount, years, DEFAULT_ANNUAL_RETURN)
}

/// Monthly savings needed to reach a target amount
///
/// Inverse of the annuity future-value formula with a monthly rate:
/// `target * r / ((1+r)^n - 1)`, straight-line `target / n` at zero return.
pub fn monthly_savings_for_goal_with(
    target_amount: f64,
    years: f64,
    annual_return_percent: f64,
) -> f64 {
    let r = annual_return_percent / 100.0 / 12.0;
    let n = years * 12.0;

    if r.abs() < 1e-10 {
        return target_amount / n;
    }

    target_amount * r / ((1.0 + r).powf(n) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tvm::annuity_future_value;
    use approx::assert_relative_eq;

    #[test]
    fn test_goal_without_inflation_is_expense_multiple() {
        // 4% withdrawal of the goal must cover a year of expenses
        let goal = retirement_goal_with(30.0, 65.0, 4000.0, 0.0, 4.0);
        assert_relative_eq!(goal, 4000.0 * 12.0 / 0.04, epsilon = 1e-6);
    }

    #[test]
    fn test_goal_grows_with_inflation() {
        let flat = retirement_goal_with(30.0, 65.0, 4000.0, 0.0, 4.0);
        let inflated = retirement_goal_with(30.0, 65.0, 4000.0, 3.0, 4.0);
        assert_relative_eq!(
            inflated,
            flat * 1.03_f64.powf(35.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_withdrawal_rate_is_infinite_goal() {
        let goal = retirement_goal_with(30.0, 65.0, 4000.0, 3.0, 0.0);
        assert_eq!(goal, f64::INFINITY);
    }

    #[test]
    fn test_savings_zero_return_is_straight_line() {
        assert_eq!(monthly_savings_for_goal_with(120_000.0, 10.0, 0.0), 1000.0);
    }

    #[test]
    fn test_savings_inverts_annuity_future_value() {
        // Saving the computed payment at the same monthly rate hits the target
        let payment = monthly_savings_for_goal_with(500_000.0, 20.0, 8.0);
        let accumulated = annuity_future_value(payment, 8.0 / 12.0, 240.0);
        assert_relative_eq!(accumulated, 500_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_higher_return_needs_less_saving() {
        let low = monthly_savings_for_goal_with(1_000_000.0, 30.0, 4.0);
        let high = monthly_savings_for_goal_with(1_000_000.0, 30.0, 10.0);
        assert!(high < low);
    }
}
