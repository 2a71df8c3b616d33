//! Line-oriented terminal session.
//!
//! `Console` owns the input and output handles plus the UI context, so menu
//! loops can run against stdin/stdout or against in-memory buffers in tests.
//! End of input is never an error: text prompts yield an empty string,
//! number prompts yield `None` and menu prompts end the loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tally_core::{report, Reportable, Result as TallyResult};

use crate::ui::{self, Badge, UiContext};

pub struct Console<R, W> {
    input: R,
    output: W,
    ui: UiContext,
    quiet: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, ui: UiContext) -> Self {
        Self {
            input,
            output,
            ui,
            quiet: false,
        }
    }

    /// Suppress menus and banners.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print unless quiet.
    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.say(text)
    }

    /// Read one line after printing `label`. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read one line; end of input reads as an empty string.
    pub fn prompt_text(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    /// Read and parse one line. Unparseable input and end of input are `None`.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        Ok(self
            .prompt(label)?
            .and_then(|line| line.trim().parse::<T>().ok()))
    }

    /// Render an operation outcome under `title`.
    pub fn show<T: Reportable>(&mut self, title: &str, outcome: &TallyResult<T>) -> io::Result<()> {
        let rendered = ui::report(&self.ui, &report(title, outcome));
        self.say(&rendered)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let rendered = ui::error_message(&self.ui, message, None);
        self.say(&rendered)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        let rendered = ui::badge(&self.ui, Badge::Info, message);
        self.say(&rendered)
    }

    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        let rendered = ui::badge(&self.ui, Badge::Warn, message);
        self.say(&rendered)
    }

    /// Report that the current action was cancelled by bad input.
    pub fn abort(&mut self, what: &str) -> io::Result<()> {
        self.error(&format!("Invalid {}, action cancelled", what))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), UiContext::plain())
    }

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut c = console("hello\r\nworld\n");
        assert_eq!(c.prompt("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(c.prompt("> ").unwrap(), Some("world".to_string()));
        assert_eq!(c.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_prompt_text_at_eof_is_empty() {
        let mut c = console("");
        assert_eq!(c.prompt_text("Name: ").unwrap(), "");
    }

    #[test]
    fn test_prompt_number_rejects_garbage() {
        let mut c = console(" 42 \nabc\n");
        assert_eq!(c.prompt_number::<u32>("N: ").unwrap(), Some(42));
        assert_eq!(c.prompt_number::<u32>("N: ").unwrap(), None);
        assert_eq!(c.prompt_number::<u32>("N: ").unwrap(), None);
    }

    #[test]
    fn test_quiet_suppresses_banner() {
        let mut c = console("").quiet(true);
        c.banner("menu").unwrap();
        c.say("result").unwrap();
        assert_eq!(String::from_utf8(c.into_output()).unwrap(), "result\n");
    }

    #[test]
    fn test_show_failure() {
        let mut c = console("");
        let outcome: TallyResult<String> = Err(tally_core::TallyError::DivisionByZero);
        c.show("Calculate", &outcome).unwrap();
        assert_eq!(
            String::from_utf8(c.into_output()).unwrap(),
            "=== Calculate ===\nERROR: Division by zero\n"
        );
    }
}
