use anyhow::Result;
use chrono::NaiveDate;
use shared::{AutoGenerateResponse, Shift};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::storage::ShiftStorage;

/// Rotation used to fill empty dates: seven day shifts, then seven
/// night/rest pairs, repeating every 21 days.
pub const SHIFT_PATTERN: [&str; 21] = [
    "주", "주", "주", "주", "주", "주", "주", "야", "휴", "야", "휴", "야", "휴", "야", "휴", "야",
    "휴", "야", "휴", "야", "휴",
];

#[derive(Debug, Error, PartialEq)]
pub enum ShiftError {
    #[error("Shift not found: {0}")]
    NotFound(String),
    #[error("Shift already exists for {0}")]
    AlreadyExists(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Shift queries and admin edits
#[derive(Clone)]
pub struct ShiftService {
    storage: Arc<dyn ShiftStorage>,
}

impl ShiftService {
    pub fn new(storage: Arc<dyn ShiftStorage>) -> Self {
        Self { storage }
    }

    /// List shifts ordered by date, limited to `[start, end]` when both are given
    pub async fn list_shifts(&self, start: Option<&str>, end: Option<&str>) -> Result<Vec<Shift>> {
        let shifts = self.storage.list_shifts(start, end).await?;
        info!("Listing {} shifts (start={:?}, end={:?})", shifts.len(), start, end);
        Ok(shifts)
    }

    /// Create one shift; dates are unique
    pub async fn create_shift(&self, shift: Shift) -> Result<Shift> {
        if self.storage.get_shift_by_date(&shift.date).await?.is_some() {
            return Err(ShiftError::AlreadyExists(shift.date).into());
        }
        let mut stored = self.storage.store_shifts(&[shift]).await?;
        stored
            .pop()
            .ok_or_else(|| anyhow::anyhow!("Storage returned no shift"))
    }

    /// Record an override for the shift on `date` and return the stored shift
    pub async fn update_shift(&self, date: &str, work_type: &str) -> Result<Shift> {
        let mut shift = self
            .storage
            .get_shift_by_date(date)
            .await?
            .ok_or_else(|| ShiftError::NotFound(date.to_string()))?;

        shift.changed_work_type = Some(work_type.to_string());
        if !self.storage.update_shift(&shift).await? {
            return Err(ShiftError::NotFound(date.to_string()).into());
        }

        info!("Changed shift {} to {} (original {})", date, work_type, shift.work_type);
        Ok(shift)
    }

    /// Fill every date in `[start_date, end_date]` that has no shift yet.
    ///
    /// The pattern position advances once per calendar day, including days
    /// that already had a shift, so existing entries never shift the rotation.
    pub async fn auto_generate(&self, start_date: &str, end_date: &str) -> Result<AutoGenerateResponse> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;

        let existing: std::collections::HashSet<String> = self
            .storage
            .list_shifts(None, None)
            .await?
            .into_iter()
            .map(|shift| shift.date)
            .collect();

        let new_shifts: Vec<Shift> = start
            .iter_days()
            .take_while(|date| *date <= end)
            .enumerate()
            .filter_map(|(index, date)| {
                let date = date.format("%Y-%m-%d").to_string();
                if existing.contains(&date) {
                    None
                } else {
                    Some(Shift::new(date, pattern_work_type(index)))
                }
            })
            .collect();

        let generated = if new_shifts.is_empty() {
            0
        } else {
            self.storage.store_shifts(&new_shifts).await?.len()
        };

        info!("Generated {} shifts from {} to {}", generated, start_date, end_date);
        Ok(AutoGenerateResponse {
            message: format!(
                "{}부터 {}까지 총 {}개의 근무표 생성 완료",
                start_date, end_date, generated
            ),
            generated,
        })
    }
}

/// Work type for the `index`-th day of a generated range
pub fn pattern_work_type(index: usize) -> &'static str {
    SHIFT_PATTERN[index % SHIFT_PATTERN.len()]
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ShiftError::InvalidDate(raw.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CsvConnection, ShiftRepository};
    use tempfile::TempDir;

    fn setup_test() -> (ShiftService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ShiftRepository::new(CsvConnection::new(temp_dir.path()).unwrap());
        (ShiftService::new(Arc::new(repo)), temp_dir)
    }

    #[test]
    fn test_pattern_rotation() {
        assert_eq!(pattern_work_type(0), "주");
        assert_eq!(pattern_work_type(6), "주");
        assert_eq!(pattern_work_type(7), "야");
        assert_eq!(pattern_work_type(8), "휴");
        assert_eq!(pattern_work_type(20), "휴");
        assert_eq!(pattern_work_type(21), "주");
    }

    #[tokio::test]
    async fn test_update_sets_changed_type() {
        let (service, _temp_dir) = setup_test();
        service.create_shift(Shift::new("2025-08-12", "주")).await.unwrap();

        let updated = service.update_shift("2025-08-12", "야").await.unwrap();
        assert_eq!(updated.work_type, "주");
        assert_eq!(updated.changed_work_type.as_deref(), Some("야"));

        let listed = service.list_shifts(None, None).await.unwrap();
        assert_eq!(listed[0], updated);
    }

    #[tokio::test]
    async fn test_update_missing_date_is_not_found() {
        let (service, _temp_dir) = setup_test();
        let err = service.update_shift("2025-08-12", "야").await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShiftError>(),
            Some(&ShiftError::NotFound("2025-08-12".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_date() {
        let (service, _temp_dir) = setup_test();
        service.create_shift(Shift::new("2025-08-12", "주")).await.unwrap();

        let err = service.create_shift(Shift::new("2025-08-12", "야")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShiftError>(),
            Some(ShiftError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_auto_generate_skips_existing_but_keeps_rotation() {
        let (service, _temp_dir) = setup_test();
        // Day index 7 would be the first night shift
        service.create_shift(Shift::new("2025-08-18", "휴")).await.unwrap();

        let result = service.auto_generate("2025-08-11", "2025-08-20").await.unwrap();
        assert_eq!(result.generated, 9);

        let shifts = service.list_shifts(None, None).await.unwrap();
        assert_eq!(shifts.len(), 10);
        let types: Vec<_> = shifts.iter().map(|s| s.work_type.as_str()).collect();
        assert_eq!(types, ["주", "주", "주", "주", "주", "주", "주", "휴", "휴", "야"]);

        // Running again adds nothing
        let again = service.auto_generate("2025-08-11", "2025-08-20").await.unwrap();
        assert_eq!(again.generated, 0);
    }

    #[tokio::test]
    async fn test_auto_generate_rejects_bad_dates() {
        let (service, _temp_dir) = setup_test();
        let err = service.auto_generate("2025-13-01", "2025-12-31").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShiftError>(),
            Some(ShiftError::InvalidDate(_))
        ));
    }
}
