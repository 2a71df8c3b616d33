use std::io::{self, BufRead, Write};

use tally_core::domain::bmi::BmiHistory;
use tally_core::Result as TallyResult;

use crate::commands::run_menu;
use crate::console::Console;

const OPTIONS: &[&str] = &["New measurement", "Show history and trend"];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let mut history = BmiHistory::new();

    run_menu(console, "BMI calculator", OPTIONS, |choice, console| match choice {
        1 => {
            let Some(weight) = console.prompt_number::<f64>("Weight (kg): ")? else {
                return console.abort("weight");
            };
            let Some(height) = console.prompt_number::<f64>("Height (m): ")? else {
                return console.abort("height");
            };
            let outcome = history.record(weight, height);
            console.show("BMI", &outcome)?;
            let recorded = outcome.is_ok();
            if recorded && history.len() > 1 {
                console.show("Trend", &history.trend())?;
            }
            Ok(())
        }
        _ => {
            if history.is_empty() {
                return console.info("No measurements yet");
            }
            let records: TallyResult<Vec<String>> = Ok(history
                .records()
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{}: {}", i + 1, r))
                .collect());
            console.show("History", &records)?;
            console.show("Trend", &history.trend())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};

    #[test]
    fn test_record_and_trend() {
        let mut c = console("1\n90\n1.80\n2\n1\n85\n1.80\n2\n0\n");
        run(&mut c).unwrap();
        let out = output(c);
        assert!(out.contains("90.0 kg, 1.80 m -> BMI 27.78 (Overweight)"));
        assert!(out.contains("=== Trend ===\nERROR: At least 2 records are needed, found 1"));
        assert!(out.contains("You lost 5.0 kg"));
    }

    #[test]
    fn test_trend_follows_each_new_measurement() {
        let mut c = console("1\n80\n1.80\n1\n80\n1.80\n0\n");
        run(&mut c).unwrap();
        let out = output(c);
        assert_eq!(out.matches("=== Trend ===").count(), 1);
        assert!(out.contains("=== Trend ===\nSUCCESS:\n  Your weight is stable (\u{00B1}0.0 kg)"));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut c = console("1\nheavy\n1\n-70\n1.7\n0\n");
        run(&mut c).unwrap();
        let out = output(c);
        assert!(out.contains("error=Invalid weight, action cancelled"));
        assert!(out.contains("ERROR: The weight must be a positive number (got -70)"));
    }
}
