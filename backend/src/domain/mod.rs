//! # Domain Module
//!
//! Business rules of the shift calendar:
//!
//! - **shift_service**: listing, admin edits, and filling date ranges with
//!   the 21-day rotation
//! - **auth_service**: shared-password admin login and session bookkeeping
//!
//! Services depend on the storage traits only, never on a concrete backend.

pub mod auth_service;
pub mod shift_service;

pub use auth_service::*;
pub use shift_service::*;
