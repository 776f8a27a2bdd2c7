/// API host used when `SHIFT_API_URL` was not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Date window fetched on page load
pub const SHIFT_WINDOW_START: &str = "2025-08-11";
pub const SHIFT_WINDOW_END: &str = "2027-04-21";

/// Base URL of the backend, overridable with `SHIFT_API_URL` at build time
pub fn api_base_url() -> &'static str {
    match option_env!("SHIFT_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}
