//! Application-level state for the Tally CLI.

mod context;

pub use context::AppContext;
