//! NPV/IRR report for a cash-flow series
//!
//! Loads an ordered cash-flow series from CSV, computes NPV at the given
//! discount rate, the IRR, and an NPV profile across a rate grid.
//! Supports JSON output for API integration via --json flag.
//! Accepts config via environment variables:
//!   CASHFLOW_FILE, DISCOUNT_RATE, IRR_GUESS,
//!   PROFILE_MIN_RATE, PROFILE_MAX_RATE, PROFILE_STEPS

use fincalc::cashflow::{irr_with_guess, loader::load_cash_flows, npv, DEFAULT_IRR_GUESS};
use fincalc::scenario::{npv_profile, rate_grid};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct CashflowReport {
    cash_flow_count: usize,
    discount_rate_pct: f64,
    npv: f64,
    /// None when the solver did not converge (NaN is not valid JSON)
    irr_pct: Option<f64>,
    npv_profile: Vec<ProfilePoint>,
    execution_time_ms: u64,
}

#[derive(Serialize)]
struct ProfilePoint {
    rate_pct: f64,
    npv: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|a| a == "--json");
    let start = Instant::now();

    let file = env::var("CASHFLOW_FILE").unwrap_or_else(|_| "cashflows.csv".to_string());
    let discount_rate: f64 = env::var("DISCOUNT_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10.0);
    let guess: f64 = env::var("IRR_GUESS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_IRR_GUESS);
    let profile_min: f64 = env::var("PROFILE_MIN_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);
    let profile_max: f64 = env::var("PROFILE_MAX_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30.0);
    let profile_steps: usize = env::var("PROFILE_STEPS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(31);

    if !json_output {
        println!("Loading cash flows from {}...", file);
    }
    let flows = load_cash_flows(Path::new(&file))
        .map_err(|e| anyhow::anyhow!("failed to load {}: {}", file, e))?;
    log::info!("loaded {} cash flows", flows.len());

    let npv_value = npv(&flows, discount_rate);
    let irr_value = irr_with_guess(&flows, guess);
    let profile = npv_profile(&flows, &rate_grid(profile_min, profile_max, profile_steps));

    let report = CashflowReport {
        cash_flow_count: flows.len(),
        discount_rate_pct: discount_rate,
        npv: npv_value,
        irr_pct: irr_value.is_finite().then_some(irr_value),
        npv_profile: profile
            .into_iter()
            .map(|(rate_pct, npv)| ProfilePoint { rate_pct, npv })
            .collect(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\nCash Flow Report ({} periods)", report.cash_flow_count);
    println!("  NPV @ {:.2}%: {:.2}", report.discount_rate_pct, report.npv);
    match report.irr_pct {
        Some(rate) => println!("  IRR: {:.4}%", rate),
        None => println!("  IRR: did not converge"),
    }

    println!("\n{:>10} {:>14}", "Rate %", "NPV");
    println!("{}", "-".repeat(25));
    for point in &report.npv_profile {
        println!("{:>10.2} {:>14.2}", point.rate_pct, point.npv);
    }

    println!("\nCompleted in {} ms", report.execution_time_ms);
    Ok(())
}
