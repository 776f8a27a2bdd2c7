//! # Shift Calendar Backend
//!
//! REST service behind the shift calendar frontend.
//!
//! ## Architecture
//!
//! ```text
//! Yew frontend
//!     ↓
//! IO Layer (REST handlers, session guard)
//!     ↓
//! Domain Layer (shift and auth services)
//!     ↓
//! Storage Layer (CSV file)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{AuthService, ShiftService};
use crate::storage::{CsvConnection, ShiftRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub shift_service: ShiftService,
    pub auth_service: AuthService,
    pub config: Arc<AppConfig>,
}

/// Initialize storage and services from the given config
pub fn initialize_backend(config: AppConfig) -> Result<AppState> {
    info!("Setting up storage in {}", config.data_dir.display());
    let connection = CsvConnection::new(&config.data_dir)?;
    connection.ensure_shifts_file_exists()?;

    info!("Setting up domain services");
    let shift_service = ShiftService::new(Arc::new(ShiftRepository::new(connection)));
    let auth_service = AuthService::new(config.admin_password.clone());

    Ok(AppState {
        shift_service,
        auth_service,
        config: Arc::new(config),
    })
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let session_header = HeaderName::from_static("session-id");
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, session_header.clone()])
        .expose_headers([HeaderName::from_static("x-session-id"), session_header])
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    let auth_routes = Router::new()
        .route("/login", post(io::auth_apis::login))
        .route("/logout", post(io::auth_apis::logout))
        .route("/check", get(io::auth_apis::check));

    let shift_routes = Router::new()
        .route("/shifts", get(io::shift_apis::list_shifts).post(io::shift_apis::create_shift))
        .route("/shifts/", get(io::shift_apis::list_shifts))
        .route("/shifts/auto-generate", post(io::shift_apis::auto_generate_shifts))
        .route("/shifts/:date/:work_type", patch(io::shift_apis::update_shift));

    Router::new()
        .nest("/auth", auth_routes)
        .merge(shift_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
