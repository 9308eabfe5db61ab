//! CSV-based cash-flow series loader
//!
//! Reads an ordered cash-flow series for NPV/IRR analysis. Accepts either a
//! single `amount` column or `period,amount` rows; insertion order is the
//! period order, so rows must be sorted by period in the file.

use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Load a cash-flow series from a CSV file
///
/// The first row is treated as a header. With two columns the first is a
/// period index used only as a sanity check against the row position.
pub fn load_cash_flows(path: &Path) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut flows = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let amount: f64 = match record.len() {
            1 => record[0].trim().parse()?,
            _ => {
                let period: usize = record[0].trim().parse()?;
                if period != row {
                    return Err(format!(
                        "cash-flow periods must be contiguous from 0: row {} has period {}",
                        row, period
                    )
                    .into());
                }
                record[1].trim().parse()?
            }
        };

        flows.push(amount);
    }

    Ok(flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_single_column() {
        let path = write_temp("fincalc_flows_single.csv", "amount\n-100.0\n60.0\n60.0\n");
        let flows = load_cash_flows(&path).unwrap();
        assert_eq!(flows, vec![-100.0, 60.0, 60.0]);
    }

    #[test]
    fn test_period_column_checked() {
        let path = write_temp(
            "fincalc_flows_periods.csv",
            "period,amount\n0,-100.0\n1,110.0\n",
        );
        let flows = load_cash_flows(&path).unwrap();
        assert_eq!(flows, vec![-100.0, 110.0]);
    }

    #[test]
    fn test_out_of_order_periods_rejected() {
        let path = write_temp(
            "fincalc_flows_bad.csv",
            "period,amount\n1,110.0\n0,-100.0\n",
        );
        assert!(load_cash_flows(&path).is_err());
    }
}
