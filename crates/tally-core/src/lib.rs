//! # Tally Core
//!
//! Core library for Tally - a set of small console record keepers (contacts,
//! notes, tasks, a library catalog) plus a handful of calculators.
//!
//! This crate provides the domain records, their validators and the generic
//! record store, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **validation**: Single-field validators returning descriptive failures
//! - **store**: Generic in-memory record store with monotonic identifiers
//! - **aggregate**: Group-and-count helpers with deterministic tie-breaking
//! - **domain**: Contacts, library, notes, tasks, BMI, temperature and friends
//! - **report**: Uniform success/failure rendering for operation outcomes
//! - **fs**: Plain-text export with atomic replace

pub mod aggregate;
pub mod domain;
pub mod error;
pub mod fs;
pub mod report;
pub mod store;
pub mod validation;

pub use error::{Result, TallyError};
pub use report::{report, Report, Reportable};
pub use store::{Record, RecordId, RecordStore};
pub use validation::ValidationError;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
