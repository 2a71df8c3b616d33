use std::io::{self, BufRead, Write};

use tally_core::domain::numbers::{doubled_evens, evens, primes, sum_greater_than, SAMPLE};
use tally_core::Result as TallyResult;

use crate::console::Console;

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    values: &[i64],
    threshold: i64,
) -> io::Result<()> {
    let numbers: &[i64] = if values.is_empty() { &SAMPLE } else { values };

    let rows: [(String, TallyResult<String>); 5] = [
        ("Numbers".to_string(), Ok(format!("{:?}", numbers))),
        ("Even numbers".to_string(), Ok(format!("{:?}", evens(numbers)))),
        (
            "Doubled evens".to_string(),
            doubled_evens(numbers).map(|doubled| format!("{:?}", doubled)),
        ),
        (
            format!("Sum of numbers greater than {}", threshold),
            sum_greater_than(numbers, threshold).map(|sum| sum.to_string()),
        ),
        ("Primes".to_string(), Ok(format!("{:?}", primes(numbers)))),
    ];
    for (title, outcome) in rows {
        console.show(&title, &outcome)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};

    #[test]
    fn test_sample_numbers() {
        let mut c = console("");
        run(&mut c, &[], 5).unwrap();
        let out = output(c);
        assert!(out.contains("=== Even numbers ===\nSUCCESS:\n[2, 4, 6, 8, 10]"));
        assert!(out.contains("=== Sum of numbers greater than 5 ===\nSUCCESS:\n40"));
        assert!(out.contains("=== Primes ===\nSUCCESS:\n[2, 3, 5, 7]"));
    }

    #[test]
    fn test_custom_numbers() {
        let mut c = console("");
        run(&mut c, &[0, 1, 11, 12], 10).unwrap();
        let out = output(c);
        assert!(out.contains("=== Primes ===\nSUCCESS:\n[11]"));
        assert!(out.contains("SUCCESS:\n23"));
    }

    #[test]
    fn test_out_of_range_values_are_reported() {
        let mut c = console("");
        run(&mut c, &[i64::MAX, 1, i64::MAX - 1], 0).unwrap();
        let out = output(c);
        assert!(out.contains("=== Doubled evens ===\nERROR: Result out of range"));
        assert!(out.contains(
            "=== Sum of numbers greater than 0 ===\nERROR: Result out of range: sum of numbers greater than 0"
        ));
        assert!(out.contains("=== Primes ===\nSUCCESS:\n[]"));
    }
}
