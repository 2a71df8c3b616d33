//! Command handlers.
//!
//! Each interactive command owns its domain state for the life of one menu
//! loop and prints every outcome through the console. Handlers only fail on
//! terminal I/O errors; domain failures are printed and the loop continues.

pub mod bmi;
pub mod calc;
pub mod contacts;
pub mod greet;
pub mod guess;
pub mod library;
pub mod misc;
pub mod notes;
pub mod numbers;
pub mod register;
pub mod tasks;
pub mod temperature;
pub mod text;

use std::io::{self, BufRead, Write};
use std::path::Path;

use tally_core::fs::write_export;
use tally_core::{report as build_report, Result as TallyResult};

use crate::console::Console;
use crate::ui;

/// Show a numbered menu until the user picks `0` or input ends.
///
/// `handle` receives the 1-based option number.
pub fn run_menu<R, W, F>(
    console: &mut Console<R, W>,
    title: &str,
    options: &[&str],
    mut handle: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(usize, &mut Console<R, W>) -> io::Result<()>,
{
    loop {
        let menu = ui::menu(console.ui(), title, options);
        console.banner(&menu)?;

        let Some(choice) = console.prompt("Option: ")? else {
            break;
        };
        match choice.trim().parse::<usize>() {
            Ok(0) => {
                console.banner("Goodbye!")?;
                break;
            }
            Ok(n) if n <= options.len() => handle(n, console)?,
            _ => console.error(&format!("Invalid option: {}", choice.trim()))?,
        }
    }
    Ok(())
}

/// Write `contents` to `dir/file_name` and report the outcome.
pub fn export<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    dir: &Path,
    file_name: &str,
    contents: TallyResult<String>,
) -> io::Result<()> {
    let written = contents.and_then(|text| write_export(dir, file_name, &text));
    match written {
        Ok(path) => {
            let path = path.display().to_string();
            let rendered = ui::receipt(console.ui(), title, &[("Path", path.as_str())]);
            console.say(&rendered)
        }
        Err(err) => {
            let failed: TallyResult<()> = Err(err);
            let rendered = ui::report(console.ui(), &build_report(title, &failed));
            console.say(&rendered)
        }
    }
}
