//! # CSV Storage Module
//!
//! File-based shift storage. All shifts live in a single `shifts.csv` in the
//! data directory:
//!
//! ```csv
//! id,date,work_type,changed_work_type
//! 1,2025-08-11,주,
//! 2,2025-08-12,주,야
//! ```
//!
//! An empty `changed_work_type` column means no override.

pub mod connection;
pub mod shift_repository;

pub use connection::CsvConnection;
pub use shift_repository::ShiftRepository;
