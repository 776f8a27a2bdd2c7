//! # Storage Module
//!
//! Persistence for shifts. The domain layer only sees the [`ShiftStorage`]
//! trait; the current implementation keeps everything in a CSV file.

pub mod csv;
pub mod traits;

pub use self::csv::{CsvConnection, ShiftRepository};
pub use traits::ShiftStorage;
