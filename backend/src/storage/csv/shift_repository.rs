use anyhow::{anyhow, Result};
use async_trait::async_trait;
use csv::{Reader, Writer};
use shared::Shift;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use super::connection::{CsvConnection, SHIFTS_HEADER};
use crate::storage::traits::ShiftStorage;

/// CSV-based shift repository.
///
/// The whole file is read and rewritten on every change; writes go through a
/// temp file and a rename so a crash never leaves a half-written file.
#[derive(Clone)]
pub struct ShiftRepository {
    connection: CsvConnection,
    file_lock: Arc<Mutex<()>>,
}

impl ShiftRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            connection,
            file_lock: Arc::new(Mutex::new(())),
        }
    }

    fn read_shifts(&self) -> Result<Vec<Shift>> {
        self.connection.ensure_shifts_file_exists()?;

        let file = File::open(self.connection.shifts_file_path())?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut shifts = Vec::new();
        for (line, result) in csv_reader.records().enumerate() {
            let record = result?;

            let date = record.get(1).unwrap_or("").to_string();
            if date.is_empty() {
                warn!("Skipping shift record {} without a date", line + 1);
                continue;
            }

            let id = record.get(0).and_then(|raw| raw.parse::<i64>().ok());
            let changed_work_type = record
                .get(3)
                .filter(|raw| !raw.is_empty())
                .map(str::to_string);

            shifts.push(Shift {
                id,
                date,
                work_type: record.get(2).unwrap_or("").to_string(),
                changed_work_type,
            });
        }

        Ok(shifts)
    }

    fn write_shifts(&self, shifts: &[Shift]) -> Result<()> {
        let file_path = self.connection.shifts_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let mut csv_writer = Writer::from_writer(BufWriter::new(file));
            csv_writer.write_record(SHIFTS_HEADER)?;

            for shift in shifts {
                let id = shift.id.map(|id| id.to_string()).unwrap_or_default();
                csv_writer.write_record([
                    id.as_str(),
                    shift.date.as_str(),
                    shift.work_type.as_str(),
                    shift.changed_work_type.as_deref().unwrap_or(""),
                ])?;
            }

            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)?;
        debug!("Wrote {} shifts to {}", shifts.len(), file_path.display());
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.file_lock
            .lock()
            .map_err(|_| anyhow!("Shift file lock poisoned"))
    }
}

#[async_trait]
impl ShiftStorage for ShiftRepository {
    async fn list_shifts(&self, start: Option<&str>, end: Option<&str>) -> Result<Vec<Shift>> {
        let _guard = self.lock()?;
        let mut shifts = self.read_shifts()?;

        if let (Some(start), Some(end)) = (start, end) {
            shifts.retain(|shift| shift.date.as_str() >= start && shift.date.as_str() <= end);
        }
        shifts.sort_by(|a, b| a.date.cmp(&b.date));

        Ok(shifts)
    }

    async fn get_shift_by_date(&self, date: &str) -> Result<Option<Shift>> {
        let _guard = self.lock()?;
        let shifts = self.read_shifts()?;
        Ok(shifts.into_iter().find(|shift| shift.date == date))
    }

    async fn store_shifts(&self, new_shifts: &[Shift]) -> Result<Vec<Shift>> {
        let _guard = self.lock()?;
        let mut shifts = self.read_shifts()?;

        let mut next_id = shifts.iter().filter_map(|shift| shift.id).max().unwrap_or(0) + 1;
        let mut stored = Vec::with_capacity(new_shifts.len());
        for shift in new_shifts {
            let shift = Shift {
                id: Some(next_id),
                ..shift.clone()
            };
            next_id += 1;
            shifts.push(shift.clone());
            stored.push(shift);
        }

        self.write_shifts(&shifts)?;
        info!("Stored {} new shifts", stored.len());
        Ok(stored)
    }

    async fn update_shift(&self, updated: &Shift) -> Result<bool> {
        let _guard = self.lock()?;
        let mut shifts = self.read_shifts()?;

        let Some(existing) = shifts.iter_mut().find(|shift| shift.date == updated.date) else {
            return Ok(false);
        };
        *existing = Shift {
            id: existing.id,
            ..updated.clone()
        };

        self.write_shifts(&shifts)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (ShiftRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        (ShiftRepository::new(connection), temp_dir)
    }

    #[tokio::test]
    async fn test_empty_repository_lists_nothing() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.list_shifts(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_assigns_sequential_ids() {
        let (repo, _temp_dir) = setup_test_repo();

        let first = repo
            .store_shifts(&[Shift::new("2025-08-11", "주"), Shift::new("2025-08-12", "주")])
            .await
            .unwrap();
        let second = repo.store_shifts(&[Shift::new("2025-08-13", "야")]).await.unwrap();

        assert_eq!(first[0].id, Some(1));
        assert_eq!(first[1].id, Some(2));
        assert_eq!(second[0].id, Some(3));
    }

    #[tokio::test]
    async fn test_list_sorts_and_filters_inclusive_range() {
        let (repo, _temp_dir) = setup_test_repo();
        repo.store_shifts(&[
            Shift::new("2025-08-14", "휴"),
            Shift::new("2025-08-11", "주"),
            Shift::new("2025-08-12", "주"),
            Shift::new("2025-08-13", "야"),
        ])
        .await
        .unwrap();

        let all = repo.list_shifts(None, None).await.unwrap();
        let dates: Vec<_> = all.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, ["2025-08-11", "2025-08-12", "2025-08-13", "2025-08-14"]);

        let ranged = repo
            .list_shifts(Some("2025-08-12"), Some("2025-08-13"))
            .await
            .unwrap();
        assert_eq!(ranged.len(), 2);
        assert_eq!(ranged[0].date, "2025-08-12");

        // A single bound is ignored
        let half_open = repo.list_shifts(Some("2025-08-13"), None).await.unwrap();
        assert_eq!(half_open.len(), 4);
    }

    #[tokio::test]
    async fn test_update_and_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let repo = ShiftRepository::new(CsvConnection::new(temp_dir.path()).unwrap());
            repo.store_shifts(&[Shift::new("2025-08-12", "주")]).await.unwrap();

            let mut changed = Shift::new("2025-08-12", "주");
            changed.changed_work_type = Some("야".to_string());
            assert!(repo.update_shift(&changed).await.unwrap());
            assert!(!repo.update_shift(&Shift::new("2030-01-01", "주")).await.unwrap());
        }

        let reopened = ShiftRepository::new(CsvConnection::new(temp_dir.path()).unwrap());
        let shift = reopened.get_shift_by_date("2025-08-12").await.unwrap().unwrap();
        assert_eq!(shift.id, Some(1));
        assert_eq!(shift.changed_work_type.as_deref(), Some("야"));
        assert!(reopened.get_shift_by_date("2025-08-13").await.unwrap().is_none());
    }
}
