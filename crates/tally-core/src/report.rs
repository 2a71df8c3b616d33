//! Uniform rendering of operation outcomes.
//!
//! Operations return anything from a single record to a list of records or a
//! summary string. [`report`] turns any of these, wrapped in a [`Result`],
//! into a [`Report`]: either the failure's message or the payload as lines.

use std::fmt;

use crate::error::Result;

/// Payload that can be rendered as report lines.
pub trait Reportable {
    fn report_lines(&self) -> Vec<String>;
}

impl Reportable for String {
    fn report_lines(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl Reportable for &str {
    fn report_lines(&self) -> Vec<String> {
        vec![(*self).to_string()]
    }
}

impl Reportable for () {
    fn report_lines(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<T: fmt::Display> Reportable for Vec<T> {
    fn report_lines(&self) -> Vec<String> {
        self.iter().map(|item| format!("  - {}", item)).collect()
    }
}

impl<T: fmt::Display> Reportable for [T] {
    fn report_lines(&self) -> Vec<String> {
        self.iter().map(|item| format!("  - {}", item)).collect()
    }
}

/// Implement [`Reportable`] for single records via their `Display` output.
///
/// Covers both the owned record and a shared reference to it, since store
/// operations hand back `&Record`.
#[macro_export]
macro_rules! reportable_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::report::Reportable for $ty {
                fn report_lines(&self) -> Vec<String> {
                    vec![format!("  {}", self)]
                }
            }
            impl $crate::report::Reportable for &$ty {
                fn report_lines(&self) -> Vec<String> {
                    vec![format!("  {}", self)]
                }
            }
        )+
    };
}

/// Rendered outcome of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Success { title: String, lines: Vec<String> },
    Failure { title: String, message: String },
}

impl Report {
    pub fn title(&self) -> &str {
        match self {
            Self::Success { title, .. } | Self::Failure { title, .. } => title,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title())?;
        match self {
            Self::Failure { message, .. } => write!(f, "ERROR: {}", message),
            Self::Success { lines, .. } => {
                write!(f, "SUCCESS:")?;
                for line in lines {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// Build a [`Report`] from an operation outcome.
pub fn report<T: Reportable>(title: &str, outcome: &Result<T>) -> Report {
    match outcome {
        Ok(payload) => Report::Success {
            title: title.to_string(),
            lines: payload.report_lines(),
        },
        Err(err) => Report::Failure {
            title: title.to_string(),
            message: err.to_string(),
        },
    }
}
