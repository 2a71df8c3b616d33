//! Error types for Tally core operations.
//!
//! Every domain operation returns a [`Result`] instead of panicking. The
//! variants form a closed set of failure reasons, each carrying just enough
//! context (the offending id, value or query) to render a message. The CLI
//! prints these and moves on to the next prompt.

use thiserror::Error;

use crate::store::RecordId;
use crate::validation::ValidationError;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Core error type for Tally operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TallyError {
    /// A single field did not meet its constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operation addressed an identifier absent from the store
    #[error("No {kind} found with ID {id}")]
    NotFound { kind: &'static str, id: RecordId },

    /// A substring query received a blank argument
    #[error("The {field} must not be empty")]
    EmptyArgument { field: &'static str },

    /// A query ran against the data but matched nothing
    #[error("No results for {0}")]
    NoMatches(String),

    /// A numeric range was reversed or started at a non-positive value
    #[error("Invalid range: {start} to {end}")]
    InvalidRange { start: i64, end: i64 },

    /// An aggregate was requested over an empty collection
    #[error("The {0} is empty")]
    EmptyCollection(&'static str),

    /// A comparison needs more history than is available
    #[error("At least {needed} records are needed, found {have}")]
    InsufficientHistory { needed: usize, have: usize },

    /// Input that should have been a number was not
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    /// Calculator operator outside `+ - * /`
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Calculator division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Integer arithmetic left the `i64` range
    #[error("Result out of range: {0}")]
    Overflow(String),

    /// A user-supplied regular expression did not compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Export or other file I/O failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        TallyError::Io(err.to_string())
    }
}

impl From<regex::Error> for TallyError {
    fn from(err: regex::Error) -> Self {
        TallyError::InvalidPattern(err.to_string())
    }
}

impl TallyError {
    /// Whether this failure means the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this failure came from a field validator.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
