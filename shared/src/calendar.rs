//! Month grid construction for the shift calendar.
//!
//! The grid starts on Sunday and only has as many weeks as the month needs,
//! so a month is rendered as four, five or six rows.

use crate::Shift;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month to complete the last week
    PaddingAfter,
}

/// A single cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// `YYYY-MM-DD`, empty for padding cells
    pub date: String,
    pub shift: Option<Shift>,
    pub day_type: CalendarDayType,
}

impl CalendarDay {
    fn padding(day_type: CalendarDayType) -> Self {
        Self {
            day: 0,
            date: String::new(),
            shift: None,
            day_type,
        }
    }
}

/// A calendar month with the shifts that fall inside it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    /// Build the grid for `year`/`month`, placing each shift on its date.
    ///
    /// Returns `None` for an invalid month. Shifts outside the month and
    /// shifts with unparseable dates are ignored.
    pub fn build(year: i32, month: u32, shifts: &[Shift]) -> Option<CalendarMonth> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days_in_month = days_in_month(year, month)?;
        let first_day_of_week = first.weekday().num_days_from_sunday();

        let by_date: HashMap<&str, &Shift> = shifts
            .iter()
            .map(|shift| (shift.date.as_str(), shift))
            .collect();

        let mut days = Vec::with_capacity(42);
        for _ in 0..first_day_of_week {
            days.push(CalendarDay::padding(CalendarDayType::PaddingBefore));
        }

        for day in 1..=days_in_month {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            let shift = by_date.get(date.as_str()).map(|shift| (*shift).clone());
            days.push(CalendarDay {
                day,
                date,
                shift,
                day_type: CalendarDayType::MonthDay,
            });
        }

        while days.len() % 7 != 0 {
            days.push(CalendarDay::padding(CalendarDayType::PaddingAfter));
        }

        Some(CalendarMonth {
            month,
            year,
            days,
            first_day_of_week,
        })
    }

    /// Title in the form `2025년 8월`
    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Get days in a month, or `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// The month currently shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Cursor for the month containing a `YYYY-MM-DD` date
    pub fn from_date_str(date: &str) -> Option<Self> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        Some(Self::new(parsed.year(), parsed.month()))
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 8), Some(31));
        assert_eq!(days_in_month(2025, 9), Some(30));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn test_build_august_2025() {
        let shifts = vec![
            Shift::new("2025-08-12", "주"),
            Shift::new("2025-09-01", "야"),
        ];
        let month = CalendarMonth::build(2025, 8, &shifts).unwrap();

        // August 1st 2025 is a Friday
        assert_eq!(month.first_day_of_week, 5);
        assert_eq!(month.days.len() % 7, 0);
        assert_eq!(month.days.len(), 42);
        assert_eq!(month.days[0].day_type, CalendarDayType::PaddingBefore);
        assert_eq!(month.days[5].day, 1);
        assert_eq!(month.days[5].date, "2025-08-01");

        let with_shift: Vec<_> = month.days.iter().filter(|d| d.shift.is_some()).collect();
        assert_eq!(with_shift.len(), 1);
        assert_eq!(with_shift[0].date, "2025-08-12");
        assert_eq!(month.title(), "2025년 8월");
    }

    #[test]
    fn test_build_uses_only_needed_weeks() {
        // February 2026 starts on Sunday and has exactly four weeks
        let month = CalendarMonth::build(2026, 2, &[]).unwrap();
        assert_eq!(month.first_day_of_week, 0);
        assert_eq!(month.days.len(), 28);
        assert_eq!(month.weeks().count(), 4);
        assert!(month
            .days
            .iter()
            .all(|d| d.day_type == CalendarDayType::MonthDay));
    }

    #[test]
    fn test_build_invalid_month() {
        assert!(CalendarMonth::build(2025, 0, &[]).is_none());
    }

    #[test]
    fn test_month_cursor_navigation() {
        let january = MonthCursor::new(2026, 1);
        assert_eq!(january.prev(), MonthCursor::new(2025, 12));
        assert_eq!(january.next(), MonthCursor::new(2026, 2));
        assert_eq!(MonthCursor::new(2025, 12).next(), MonthCursor::new(2026, 1));
        assert_eq!(
            MonthCursor::from_date_str("2025-08-12"),
            Some(MonthCursor::new(2025, 8))
        );
        assert_eq!(MonthCursor::from_date_str("not a date"), None);
    }
}
