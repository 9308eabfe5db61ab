//! AWS Lambda handler for the financial calculator
//!
//! Accepts a JSON calculation request tagged by operation and returns the
//! numeric result(s) as JSON. Supports Lambda Function URLs for direct
//! HTTP access.

use fincalc::cashflow::DEFAULT_IRR_GUESS;
use fincalc::planning::{
    monthly_savings_for_goal_with, retirement_goal_with, DEFAULT_ANNUAL_RETURN,
    DEFAULT_INFLATION_RATE, DEFAULT_WITHDRAWAL_RATE,
};
use fincalc::{
    annuity_future_value, annuity_present_value, compound_interest, irr_with_guess, loan_payment,
    npv, sharpe_ratio, volatility, CompoundInterestParams, LoanParams,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

fn default_irr_guess() -> f64 {
    DEFAULT_IRR_GUESS
}

fn default_inflation() -> f64 {
    DEFAULT_INFLATION_RATE
}

fn default_withdrawal() -> f64 {
    DEFAULT_WITHDRAWAL_RATE
}

fn default_annual_return() -> f64 {
    DEFAULT_ANNUAL_RETURN
}

/// Calculation request, tagged by operation
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum CalcRequest {
    CompoundInterest(CompoundInterestParams),
    LoanPayment(LoanParams),
    AnnuityFutureValue {
        payment: f64,
        rate: f64,
        periods: f64,
    },
    AnnuityPresentValue {
        payment: f64,
        rate: f64,
        periods: f64,
    },
    Npv {
        cash_flows: Vec<f64>,
        discount_rate: f64,
    },
    Irr {
        cash_flows: Vec<f64>,
        #[serde(default = "default_irr_guess")]
        guess: f64,
    },
    Volatility {
        returns: Vec<f64>,
    },
    SharpeRatio {
        portfolio_return: f64,
        risk_free_rate: f64,
        volatility: f64,
    },
    RetirementGoal {
        current_age: f64,
        retirement_age: f64,
        monthly_expenses: f64,
        #[serde(default = "default_inflation")]
        inflation_rate: f64,
        #[serde(default = "default_withdrawal")]
        withdrawal_rate: f64,
    },
    MonthlySavingsForGoal {
        target_amount: f64,
        years: f64,
        #[serde(default = "default_annual_return")]
        annual_return: f64,
    },
}

/// Single-number result; non-finite values are reported as null since
/// NaN/Infinity are not representable in JSON
#[derive(Serialize)]
struct ValueResponse {
    result: Option<f64>,
}

fn value_response(value: f64) -> Response<Body> {
    let body = ValueResponse {
        result: value.is_finite().then_some(value),
    };
    json_response(&serde_json::to_value(&body).unwrap())
}

fn json_response(body: &serde_json::Value) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(body.to_string()))
        .unwrap()
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(json!({ "error": message }).to_string()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalcRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let response = match request {
        CalcRequest::CompoundInterest(params) => {
            let growth = compound_interest(&params);
            json_response(&serde_json::to_value(growth)?)
        }
        CalcRequest::LoanPayment(params) => value_response(loan_payment(&params)),
        CalcRequest::AnnuityFutureValue {
            payment,
            rate,
            periods,
        } => value_response(annuity_future_value(payment, rate, periods)),
        CalcRequest::AnnuityPresentValue {
            payment,
            rate,
            periods,
        } => value_response(annuity_present_value(payment, rate, periods)),
        CalcRequest::Npv {
            cash_flows,
            discount_rate,
        } => value_response(npv(&cash_flows, discount_rate)),
        CalcRequest::Irr { cash_flows, guess } => {
            value_response(irr_with_guess(&cash_flows, guess))
        }
        CalcRequest::Volatility { returns } => value_response(volatility(&returns)),
        CalcRequest::SharpeRatio {
            portfolio_return,
            risk_free_rate,
            volatility,
        } => value_response(sharpe_ratio(portfolio_return, risk_free_rate, volatility)),
        CalcRequest::RetirementGoal {
            current_age,
            retirement_age,
            monthly_expenses,
            inflation_rate,
            withdrawal_rate,
        } => value_response(retirement_goal_with(
            current_age,
            retirement_age,
            monthly_expenses,
            inflation_rate,
            withdrawal_rate,
        )),
        CalcRequest::MonthlySavingsForGoal {
            target_amount,
            years,
            annual_return,
        } => value_response(monthly_savings_for_goal_with(
            target_amount,
            years,
            annual_return,
        )),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
