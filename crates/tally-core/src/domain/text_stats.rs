//! Word statistics over free text.
//!
//! Text is normalized before counting: lowercased, punctuation replaced by
//! spaces and runs of whitespace collapsed. Word characters follow Unicode,
//! so accented words survive normalization intact.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::aggregate::{count_by, max_by_count};
use crate::error::Result;

static PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));

/// Built-in sample text for the analyzer.
pub const SAMPLE_TEXT: &str = "
Kotlin es un lenguaje de programación moderno y conciso.
Kotlin corre sobre la Máquina Virtual de Java (JVM).
Es totalmente interoperable con Java, lo que facilita
su adopción. Kotlin es el lenguaje preferido para
el desarrollo de aplicaciones Android.
";

pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION_RE.replace_all(&lowered, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Words of already-normalized text.
pub fn words(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

/// Non-whitespace characters.
pub fn character_count(normalized: &str) -> usize {
    normalized.chars().filter(|c| !c.is_whitespace()).count()
}

pub fn average_word_length(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    total as f64 / words.len() as f64
}

/// Occurrences per word, in first-appearance order.
pub fn word_frequencies(words: &[String]) -> Vec<(String, usize)> {
    count_by(words.iter(), |w: &String| w.clone())
}

pub fn most_frequent(frequencies: &[(String, usize)]) -> Option<&str> {
    max_by_count(frequencies).map(|(word, _)| word.as_str())
}

/// Words matching `pattern` in full.
///
/// The pattern must compile on its own before it is anchored, so a stray
/// `)` cannot close the wrapping group and escape the anchors.
pub fn find_pattern(words: &[String], pattern: &str) -> Result<Vec<String>> {
    Regex::new(pattern)?;
    let re = Regex::new(&format!("^(?:{})$", pattern))?;
    Ok(words.iter().filter(|w| re.is_match(w)).cloned().collect())
}

/// Aggregate figures for one text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub total_characters: usize,
    pub total_words: usize,
    pub average_word_length: f64,
    pub most_frequent: Option<String>,
    pub frequencies: Vec<(String, usize)>,
    pub words: Vec<String>,
}

pub fn analyze(text: &str) -> TextStats {
    let normalized = normalize(text);
    let words = words(&normalized);
    let frequencies = word_frequencies(&words);
    TextStats {
        total_characters: character_count(&normalized),
        total_words: words.len(),
        average_word_length: average_word_length(&words),
        most_frequent: most_frequent(&frequencies).map(str::to_string),
        frequencies,
        words,
    }
}

impl TextStats {
    /// The `n` most frequent words; equal counts keep first-appearance order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.frequencies.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    fn most_frequent_label(&self) -> &str {
        self.most_frequent.as_deref().unwrap_or("N/A")
    }

    pub fn export_text(&self) -> String {
        let mut out = String::from("--- TEXT ANALYSIS ---\n");
        out.push_str(&format!("Total words: {}\n", self.total_words));
        out.push_str(&format!("Average length: {:.2}\n", self.average_word_length));
        out.push_str(&format!("Most frequent word: {}\n", self.most_frequent_label()));
        out.push_str("\n--- WORD FREQUENCIES ---\n");
        for (word, count) in &self.frequencies {
            out.push_str(&format!("{}: {}\n", word, count));
        }
        out
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words: {}", self.total_words)?;
        writeln!(f, "Total characters (no spaces): {}", self.total_characters)?;
        writeln!(f, "Average word length: {:.2} characters", self.average_word_length)?;
        write!(f, "Most frequent word: {}", self.most_frequent_label())
    }
}
