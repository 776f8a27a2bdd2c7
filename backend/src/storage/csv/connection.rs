use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SHIFTS_FILE_NAME: &str = "shifts.csv";
pub const SHIFTS_HEADER: [&str; 4] = ["id", "date", "work_type", "changed_work_type"];

/// CsvConnection manages the data directory and makes sure the shift file exists
#[derive(Clone, Debug)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            info!("Creating data directory {}", base_path.display());
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn shifts_file_path(&self) -> PathBuf {
        self.base_directory.join(SHIFTS_FILE_NAME)
    }

    /// Write an empty file with just the header if none exists yet
    pub fn ensure_shifts_file_exists(&self) -> Result<()> {
        let path = self.shifts_file_path();
        if !path.exists() {
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(SHIFTS_HEADER)?;
            writer.flush()?;
            info!("Created shift file {}", path.display());
        }
        Ok(())
    }
}
