use shared::{CalendarMonth, MonthCursor, Shift};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils;

pub struct UseCalendarResult {
    pub cursor: MonthCursor,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

impl UseCalendarResult {
    /// Grid for the displayed month, filled with the given shifts
    pub fn month(&self, shifts: &[Shift]) -> Option<CalendarMonth> {
        CalendarMonth::build(self.cursor.year, self.cursor.month, shifts)
    }
}

/// Month navigation, starting at the month containing today
#[hook]
pub fn use_calendar() -> UseCalendarResult {
    let cursor = use_state(date_utils::current_month);

    let prev_month = {
        let cursor = cursor.clone();
        use_callback(*cursor, move |_: MouseEvent, current| {
            cursor.set(current.prev());
        })
    };

    let next_month = {
        let cursor = cursor.clone();
        use_callback(*cursor, move |_: MouseEvent, current| {
            cursor.set(current.next());
        })
    };

    UseCalendarResult {
        cursor: *cursor,
        actions: UseCalendarActions {
            prev_month,
            next_month,
        },
    }
}
