use shared::MonthCursor;

/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Month containing today, falling back to the start of the shift window
pub fn current_month() -> MonthCursor {
    MonthCursor::from_date_str(&get_current_date())
        .or_else(|| MonthCursor::from_date_str(crate::config::SHIFT_WINDOW_START))
        .unwrap_or_else(|| MonthCursor::new(2025, 8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_current_date_is_iso_formatted() {
        let today = get_current_date();
        assert_eq!(today.len(), 10);
        assert!(MonthCursor::from_date_str(&today).is_some());
    }
}
