pub mod calendar;
pub mod header;
pub mod login_modal;
pub mod shift_edit_modal;
