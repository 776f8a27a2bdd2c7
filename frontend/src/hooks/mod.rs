pub mod use_calendar;
pub mod use_session;
pub mod use_shifts;
