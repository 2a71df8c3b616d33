use std::io::{self, BufRead, Write};

use tally_core::domain::calculator::{calculate, Operator};

use crate::console::Console;

/// Compute `a op b`, prompting for whatever was not given on the command line.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    a: Option<f64>,
    op: Option<&str>,
    b: Option<f64>,
) -> io::Result<()> {
    let a = match a {
        Some(a) => a,
        None => match console.prompt_number::<f64>("First number: ")? {
            Some(a) => a,
            None => return console.abort("number"),
        },
    };
    let op = match op {
        Some(op) => op.to_string(),
        None => console.prompt_text("Operator (+ - * /): ")?,
    };
    let b = match b {
        Some(b) => b,
        None => match console.prompt_number::<f64>("Second number: ")? {
            Some(b) => b,
            None => return console.abort("number"),
        },
    };

    let outcome = Operator::parse(&op)
        .and_then(|op| calculate(a, op, b).map(|result| format!("{} {} {} = {}", a, op, b, result)));
    console.show("Calculator", &outcome)
}
