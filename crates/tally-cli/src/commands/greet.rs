use std::io::{self, BufRead, Write};

use chrono::{Local, Timelike};
use tally_core::domain::greeting::greet;

use crate::console::Console;

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: Option<&str>,
    hour: Option<u32>,
) -> io::Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => console.prompt_text("Your name: ")?,
    };
    let hour = hour.unwrap_or_else(|| Local::now().hour());
    console.say(&greet(&name, hour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};

    #[test]
    fn test_greet_with_hour() {
        let mut c = console("");
        run(&mut c, Some("Ana"), Some(20)).unwrap();
        assert_eq!(output(c), "Good evening, Ana\n");
    }

    #[test]
    fn test_greet_prompts_for_name() {
        let mut c = console("Luis\n");
        run(&mut c, None, Some(8)).unwrap();
        assert!(output(c).ends_with("Good morning, Luis\n"));
    }
}
