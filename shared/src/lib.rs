use serde::{Deserialize, Serialize};
use std::fmt;

pub mod calendar;
pub mod forms;
pub mod session;

pub use calendar::{CalendarDay, CalendarDayType, CalendarMonth, MonthCursor};
pub use forms::{LoginFailure, LoginForm, LoginPhase, ShiftEditForm};
pub use session::{CredentialStore, MemoryCredentialStore, Navigator, ResponseDisposition};

/// One calendar day's assigned work type plus an optional override.
///
/// Shifts are owned by the backend; the frontend only keeps a transient copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Calendar date in `YYYY-MM-DD` form, unique per shift
    pub date: String,
    /// Originally scheduled work type code
    pub work_type: String,
    /// Work type set by an admin edit, if any
    #[serde(default)]
    pub changed_work_type: Option<String>,
}

impl Shift {
    pub fn new(date: impl Into<String>, work_type: impl Into<String>) -> Self {
        Self {
            id: None,
            date: date.into(),
            work_type: work_type.into(),
            changed_work_type: None,
        }
    }

    /// True when an override exists and differs from the original type.
    pub fn is_changed(&self) -> bool {
        match &self.changed_work_type {
            Some(changed) => changed != &self.work_type,
            None => false,
        }
    }

    /// The changed work type if present, else the original one.
    pub fn effective_work_type(&self) -> &str {
        match self.changed_work_type.as_deref() {
            Some(changed) if !changed.is_empty() => changed,
            _ => &self.work_type,
        }
    }
}

/// Duty categories the UI lets an admin pick from.
///
/// Shift data itself is not validated against this list; unknown codes
/// from the backend still render, just without a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkType {
    Day,
    Night,
    Rest,
}

impl WorkType {
    pub const ALL: [WorkType; 3] = [WorkType::Day, WorkType::Night, WorkType::Rest];

    pub fn code(&self) -> &'static str {
        match self {
            WorkType::Day => "주",
            WorkType::Night => "야",
            WorkType::Rest => "휴",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            WorkType::Day => "#ffd600",
            WorkType::Night => "#424242",
            WorkType::Rest => "#ffffff",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            WorkType::Day => "#3c3c3c",
            WorkType::Night => "#ffffff",
            WorkType::Rest => "#f05a6e",
        }
    }

    pub fn from_code(code: &str) -> Option<WorkType> {
        Self::ALL.into_iter().find(|work_type| work_type.code() == code)
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Merge the server's view of an updated shift into the local list.
///
/// Only `changed_work_type` of the entry whose date matches is replaced;
/// every other entry is returned untouched. An unknown date changes nothing.
pub fn merge_updated_shift(shifts: &[Shift], date: &str, updated: &Shift) -> Vec<Shift> {
    shifts
        .iter()
        .map(|shift| {
            if shift.date == date {
                Shift {
                    changed_work_type: updated.changed_work_type.clone(),
                    ..shift.clone()
                }
            } else {
                shift.clone()
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    pub authenticated: bool,
    pub message: String,
}

/// Result of filling a date range with the rotation pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoGenerateResponse {
    pub message: String,
    pub generated: usize,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
}
