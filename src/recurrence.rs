//! Recurring-transaction scheduling
//!
//! Drives the `next_execution_date` / `advance_days` / `execution_count`
//! fields of a recurring transaction: deciding when a transaction is due
//! and stepping its schedule forward after each execution.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How often a recurring transaction executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// Error for unrecognized frequency strings
#[derive(Debug, Error)]
#[error("unknown recurrence frequency: {0:?}")]
pub struct ParseFrequencyError(String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(ParseFrequencyError(other.to_string())),
        }
    }
}

impl Frequency {
    /// Next occurrence after `date`
    ///
    /// Month-based frequencies clamp to the last day of shorter months
    /// (Jan 31 -> Feb 28), matching common billing-cycle behavior.
    pub fn step(&self, date: NaiveDate) -> NaiveDate {
        let next = match self {
            Frequency::Weekly => date.checked_add_days(Days::new(7)),
            Frequency::Biweekly => date.checked_add_days(Days::new(14)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Quarterly => date.checked_add_months(Months::new(3)),
            Frequency::Yearly => date.checked_add_months(Months::new(12)),
        };

        // Overflow only occurs at the far end of the representable range
        next.unwrap_or(NaiveDate::MAX)
    }
}

/// Execution schedule for one recurring transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringSchedule {
    pub frequency: Frequency,

    /// Date the transaction should next execute
    pub next_execution_date: NaiveDate,

    /// Days of notice before the execution date at which the transaction
    /// already counts as due (e.g. to create it ahead of time)
    #[serde(default)]
    pub advance_days: u32,

    /// Number of executions performed so far
    #[serde(default)]
    pub execution_count: u32,

    /// Stop after this many executions; None runs indefinitely
    #[serde(default)]
    pub max_executions: Option<u32>,
}

impl RecurringSchedule {
    pub fn new(frequency: Frequency, first_execution: NaiveDate) -> Self {
        Self {
            frequency,
            next_execution_date: first_execution,
            advance_days: 0,
            execution_count: 0,
            max_executions: None,
        }
    }

    /// Whether all planned executions have run
    pub fn is_exhausted(&self) -> bool {
        self.max_executions
            .map(|max| self.execution_count >= max)
            .unwrap_or(false)
    }

    /// Whether the transaction is due as of `today`, honoring the
    /// advance-notice window
    pub fn is_due(&self, today: NaiveDate) -> bool {
        if self.is_exhausted() {
            return false;
        }

        let horizon = today
            .checked_add_days(Days::new(self.advance_days as u64))
            .unwrap_or(NaiveDate::MAX);

        horizon >= self.next_execution_date
    }

    /// Record an execution and step the schedule to the next occurrence
    pub fn advance(&mut self) {
        self.next_execution_date = self.frequency.step(self.next_execution_date);
        self.execution_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_step_clamps_to_month_end() {
        assert_eq!(Frequency::Monthly.step(date(2026, 1, 31)), date(2026, 2, 28));
        assert_eq!(Frequency::Monthly.step(date(2024, 1, 31)), date(2024, 2, 29));
        assert_eq!(Frequency::Monthly.step(date(2026, 4, 15)), date(2026, 5, 15));
    }

    #[test]
    fn test_weekly_and_biweekly_steps() {
        assert_eq!(Frequency::Weekly.step(date(2026, 8, 29)), date(2026, 9, 5));
        assert_eq!(Frequency::Biweekly.step(date(2026, 8, 29)), date(2026, 9, 12));
    }

    #[test]
    fn test_yearly_leap_day_clamps() {
        assert_eq!(Frequency::Yearly.step(date(2024, 2, 29)), date(2025, 2, 28));
    }

    #[test]
    fn test_due_respects_advance_days() {
        let mut schedule = RecurringSchedule::new(Frequency::Monthly, date(2026, 9, 10));
        schedule.advance_days = 5;

        assert!(!schedule.is_due(date(2026, 9, 4)));
        assert!(schedule.is_due(date(2026, 9, 5)));
        assert!(schedule.is_due(date(2026, 9, 10)));
    }

    #[test]
    fn test_advance_steps_and_counts() {
        let mut schedule = RecurringSchedule::new(Frequency::Quarterly, date(2026, 1, 31));
        schedule.advance();
        assert_eq!(schedule.next_execution_date, date(2026, 4, 30));
        assert_eq!(schedule.execution_count, 1);
    }

    #[test]
    fn test_max_executions_exhausts() {
        let mut schedule = RecurringSchedule::new(Frequency::Weekly, date(2026, 9, 1));
        schedule.max_executions = Some(2);

        assert!(schedule.is_due(date(2026, 9, 1)));
        schedule.advance();
        schedule.advance();
        assert!(schedule.is_exhausted());
        assert!(!schedule.is_due(date(2027, 1, 1)));
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("Monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }
}
