//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handles
//! (de)serialization, session checks on admin routes and the mapping of
//! domain errors to status codes.
//!
//! ## Endpoints
//!
//! - **POST /auth/login**, **POST /auth/logout**, **GET /auth/check**
//! - **GET /shifts/**: list shifts, optionally limited to `start`..`end`
//! - **POST /shifts**: create a shift (admin)
//! - **POST /shifts/auto-generate**: fill a date range with the rotation (admin)
//! - **PATCH /shifts/:date/:work_type**: override a day's work type (admin)

pub mod rest;

pub use rest::*;
