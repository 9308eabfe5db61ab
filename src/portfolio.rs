//! Portfolio risk statistics: volatility and Sharpe ratio

/// Population standard deviation of a return series
///
/// `sqrt(mean((r_i - mean)^2))`. Order of the series is irrelevant. An
/// empty series divides zero by zero in the mean and yields NaN; callers
/// that need a hard failure should check emptiness themselves.
pub fn volatility(returns: &[f64]) -> f64 {
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;

    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt()
}

/// Sharpe ratio: excess return per unit of volatility
///
/// `(portfolio_return - risk_free_rate) / volatility`. Zero volatility
/// (a constant return series) yields ±Infinity or NaN under IEEE-754
/// division, never a panic.
pub fn sharpe_ratio(portfolio_return: f64, risk_free_rate: f64, volatility: f64) -> f64 {
    (portfolio_return - risk_free_rate) / volatility
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_series_has_zero_volatility() {
        assert_eq!(volatility(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_known_population_stddev() {
        // mean 5, squared deviations 9,1,1,9 -> variance 5
        let vol = volatility(&[2.0, 4.0, 6.0, 8.0]);
        assert_relative_eq!(vol, 5.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_single_element_has_zero_volatility() {
        assert_eq!(volatility(&[3.7]), 0.0);
    }

    #[test]
    fn test_empty_series_is_nan() {
        assert!(volatility(&[]).is_nan());
    }

    #[test]
    fn test_sharpe_known_value() {
        assert_relative_eq!(sharpe_ratio(12.0, 4.0, 16.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sharpe_zero_volatility_is_nonfinite() {
        assert_eq!(sharpe_ratio(10.0, 4.0, 0.0), f64::INFINITY);
        assert_eq!(sharpe_ratio(2.0, 4.0, 0.0), f64::NEG_INFINITY);
        assert!(sharpe_ratio(4.0, 4.0, 0.0).is_nan());
    }
}
