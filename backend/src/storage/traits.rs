//! # Storage Traits
//!
//! Storage abstraction the domain layer works against, so the CSV backend
//! can be swapped without touching the services.

use anyhow::Result;
use async_trait::async_trait;
use shared::Shift;

/// Trait defining the interface for shift storage operations
#[async_trait]
pub trait ShiftStorage: Send + Sync {
    /// List shifts ordered by date ascending.
    ///
    /// The range is only applied when both bounds are given; bounds are
    /// inclusive and compared as `YYYY-MM-DD` strings.
    async fn list_shifts(&self, start: Option<&str>, end: Option<&str>) -> Result<Vec<Shift>>;

    /// Retrieve the shift for a date
    async fn get_shift_by_date(&self, date: &str) -> Result<Option<Shift>>;

    /// Store new shifts, assigning ids. Returns the stored shifts.
    async fn store_shifts(&self, shifts: &[Shift]) -> Result<Vec<Shift>>;

    /// Replace the shift that has the same date.
    /// Returns false if no shift exists for that date.
    async fn update_shift(&self, shift: &Shift) -> Result<bool>;
}
