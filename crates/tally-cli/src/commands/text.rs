use std::io::{self, BufRead, Write};
use std::path::Path;

use tally_core::domain::text_stats::{analyze, find_pattern};
use tally_core::Result as TallyResult;

use crate::commands::{export, run_menu};
use crate::console::Console;

pub const EXPORT_FILE: &str = "text_analysis.txt";

const OPTIONS: &[&str] = &[
    "Show statistics",
    "Top words",
    "Find words by pattern",
    "Analyze new text",
    "Export analysis",
];

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    export_dir: &Path,
    text: &str,
) -> io::Result<()> {
    let mut stats = analyze(text);

    run_menu(console, "Text statistics", OPTIONS, |choice, console| match choice {
        1 => {
            let summary: TallyResult<String> = Ok(stats.to_string());
            console.show("Statistics", &summary)
        }
        2 => {
            let Some(n) = console.prompt_number::<usize>("How many words? ")? else {
                return console.abort("count");
            };
            let top: TallyResult<Vec<String>> = Ok(stats
                .top(n)
                .into_iter()
                .map(|(word, count)| format!("{}: {}", word, count))
                .collect());
            console.show(&format!("Top {} words", n), &top)
        }
        3 => {
            let pattern = console.prompt_text("Regex pattern: ")?;
            let title = format!("Words matching '{}'", pattern);
            console.show(&title, &find_pattern(&stats.words, &pattern))
        }
        4 => {
            let line = console.prompt_text("Text: ")?;
            stats = analyze(&line);
            let summary: TallyResult<String> = Ok(stats.to_string());
            console.show("Statistics", &summary)
        }
        _ => export(
            console,
            "Export analysis",
            export_dir,
            EXPORT_FILE,
            Ok(stats.export_text()),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output};
    use tally_core::domain::text_stats::SAMPLE_TEXT;

    #[test]
    fn test_sample_statistics_and_top() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = console("1\n2\n1\n0\n");
        run(&mut c, dir.path(), SAMPLE_TEXT).unwrap();
        let out = output(c);
        assert!(out.contains("Most frequent word: kotlin"));
        assert!(out.contains("=== Top 1 words ===\nSUCCESS:\n  - kotlin: 3"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = console("3\n(\n0\n");
        run(&mut c, dir.path(), SAMPLE_TEXT).unwrap();
        assert!(output(c).contains("ERROR: Invalid pattern:"));
    }

    #[test]
    fn test_new_text_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = console("4\nHola hola, mundo.\n5\n0\n");
        run(&mut c, dir.path(), SAMPLE_TEXT).unwrap();
        let text = std::fs::read_to_string(dir.path().join(EXPORT_FILE)).unwrap();
        assert!(text.contains("Total words: 3"));
        assert!(text.contains("hola: 2\nmundo: 1\n"));
    }
}
