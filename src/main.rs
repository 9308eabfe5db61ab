//! Financial calculator CLI
//!
//! Computes a loan amortization, an investment growth projection, and a
//! retirement plan from command-line inputs, writing the full schedule
//! to CSV.

use anyhow::Context;
use clap::Parser;
use fincalc::{
    amortization_schedule, compound_interest, loan_payment, monthly_savings_for_goal,
    retirement_goal, CompoundInterestParams, LoanParams,
};
use log::info;
use std::fs::File;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "fincalc", about = "Financial calculator")]
struct Args {
    /// Loan principal
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 12.0)]
    rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 1.0)]
    term: f64,

    /// Current age for the retirement plan
    #[arg(long, default_value_t = 30.0)]
    age: f64,

    /// Target retirement age
    #[arg(long, default_value_t = 65.0)]
    retirement_age: f64,

    /// Current monthly expenses for the retirement plan
    #[arg(long, default_value_t = 4_000.0)]
    monthly_expenses: f64,

    /// Output path for the amortization schedule CSV
    #[arg(long, default_value = "amortization_schedule.csv")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("fincalc v0.1.0");
    println!("==============\n");

    // Loan amortization
    let loan = LoanParams::new(args.principal, args.rate, args.term);
    let payment = loan_payment(&loan);
    let schedule = amortization_schedule(&loan);
    info!("computed {} schedule rows", schedule.len());

    println!(
        "Loan: ${:.2} at {:.2}% for {} years -> ${:.2}/month",
        loan.principal, loan.rate, loan.term_years, payment
    );
    println!("{:>5} {:>12} {:>12} {:>12} {:>14}", "Month", "Payment", "Interest", "Principal", "Balance");
    println!("{}", "-".repeat(60));

    for row in schedule.iter().take(12) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month, row.payment, row.interest, row.principal_paid, row.balance
        );
    }
    if schedule.len() > 12 {
        println!("... ({} more months)", schedule.len() - 12);
    }

    // Write full schedule to CSV
    let mut file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output))?;
    writeln!(file, "Month,Payment,Interest,Principal,Balance")?;
    for row in &schedule {
        writeln!(
            file,
            "{},{:.8},{:.8},{:.8},{:.8}",
            row.month, row.payment, row.interest, row.principal_paid, row.balance
        )?;
    }
    println!("\nFull schedule written to: {}", args.output);

    // Growth projection for the same principal
    let growth = compound_interest(&CompoundInterestParams::monthly(
        args.principal,
        args.rate,
        args.term,
    ));
    println!("\nInvested instead at {:.2}% (monthly compounding):", args.rate);
    println!("  Final Amount: ${:.2}", growth.final_amount);
    println!("  Total Return: ${:.2} ({:.2}%)", growth.total_return, growth.total_return_percentage);
    println!("  Annualized:   {:.2}%", growth.annualized_return);

    // Retirement plan
    let goal = retirement_goal(args.age, args.retirement_age, args.monthly_expenses);
    let savings = monthly_savings_for_goal(goal, args.retirement_age - args.age);
    println!("\nRetirement plan (age {} -> {}):", args.age, args.retirement_age);
    println!("  Nest Egg Needed:  ${:.2}", goal);
    println!("  Monthly Savings:  ${:.2}", savings);

    Ok(())
}
