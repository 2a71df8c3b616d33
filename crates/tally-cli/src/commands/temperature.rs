use std::io::{self, BufRead, Write};

use tally_core::domain::temperature::{convert, Conversion, ConversionOutcome};
use tally_core::Result as TallyResult;

use crate::commands::run_menu;
use crate::console::Console;

const OPTIONS: &[&str] = &[
    "Celsius (°C) to Fahrenheit (°F)",
    "Kelvin (K) to Celsius (°C)",
    "Fahrenheit (°F) to Celsius (°C)",
    "Show history",
];

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let mut history: Vec<ConversionOutcome> = Vec::new();

    run_menu(console, "Temperature converter", OPTIONS, |choice, console| {
        let conversion = match choice {
            1 => Conversion::CelsiusToFahrenheit,
            2 => Conversion::KelvinToCelsius,
            3 => Conversion::FahrenheitToCelsius,
            _ => {
                if history.is_empty() {
                    return console.info("No conversions yet");
                }
                let all: TallyResult<Vec<ConversionOutcome>> = Ok(history.clone());
                return console.show("History", &all);
            }
        };

        let label = format!("Value in {}: ", conversion.source());
        let raw = console.prompt_text(&label)?;
        let outcome = convert(&raw, conversion);
        if let Ok(done) = &outcome {
            history.push(*done);
        }
        console.show("Conversion", &outcome)?;
        if matches!(outcome, Ok(ConversionOutcome { at_absolute_zero: true, .. })) {
            console.warn("That is absolute zero, the lowest possible temperature")?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};

    #[test]
    fn test_conversions_and_history() {
        let mut c = console("1\n100\n2\n0\n3\n-500\n2\nabc\n4\n0\n");
        run(&mut c).unwrap();
        let out = output(c);
        assert!(out.contains("100.00 °C = 212.00 °F"));
        assert!(out.contains("absolute zero"));
        assert!(out.contains("-500 °F is physically impossible"));
        assert!(out.contains("ERROR: 'abc' is not a valid number"));
        assert!(out.contains("=== History ===\nSUCCESS:\n  - 100.00 °C = 212.00 °F\n  - 0.00 K = -273.15 °C"));
    }
}
