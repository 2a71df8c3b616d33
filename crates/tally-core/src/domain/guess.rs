//! Number guessing game.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::reportable_display;
use crate::validation::validate_in_range;

pub const MIN_SECRET: i64 = 1;
pub const MAX_SECRET: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessHint {
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
}

impl fmt::Display for GuessHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow => f.write_str("The secret number is higher"),
            Self::TooHigh => f.write_str("The secret number is lower"),
            Self::Correct { attempts } => {
                write!(f, "Correct! You found it in {} attempts", attempts)
            }
        }
    }
}

reportable_display!(GuessHint);

/// One round against a fixed secret.
#[derive(Debug, Clone)]
pub struct GuessGame {
    secret: i64,
    attempts: u32,
}

impl GuessGame {
    /// `secret` is clamped into `[MIN_SECRET, MAX_SECRET]`.
    pub fn new(secret: i64) -> Self {
        Self {
            secret: secret.clamp(MIN_SECRET, MAX_SECRET),
            attempts: 0,
        }
    }

    /// Score a guess. Out-of-range guesses are rejected without counting.
    pub fn guess(&mut self, n: i64) -> Result<GuessHint> {
        let n = validate_in_range("guess", n, MIN_SECRET, MAX_SECRET)?;
        self.attempts += 1;
        debug!(attempts = self.attempts, "guess scored");
        Ok(match n.cmp(&self.secret) {
            std::cmp::Ordering::Less => GuessHint::TooLow,
            std::cmp::Ordering::Greater => GuessHint::TooHigh,
            std::cmp::Ordering::Equal => GuessHint::Correct {
                attempts: self.attempts,
            },
        })
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Best (lowest) attempt count across rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    best: Option<u32>,
    rounds: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round; returns whether it set a new best.
    pub fn record(&mut self, attempts: u32) -> bool {
        self.rounds += 1;
        let improved = self.best.map_or(true, |best| attempts < best);
        if improved {
            self.best = Some(attempts);
        }
        improved
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}
