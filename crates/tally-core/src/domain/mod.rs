//! Domain records and the operations over them.
//!
//! Record keepers (`contacts`, `notes`, `tasks`) own a [`RecordStore`] and
//! follow the same validate-then-mutate shape. The catalog in `library` is
//! read-only. The remaining modules are small calculators that share the
//! validators and error type.
//!
//! [`RecordStore`]: crate::store::RecordStore

pub mod bmi;
pub mod calculator;
pub mod contacts;
pub mod greeting;
pub mod guess;
pub mod library;
pub mod notes;
pub mod numbers;
pub mod registration;
pub mod tasks;
pub mod temperature;
pub mod text_stats;
