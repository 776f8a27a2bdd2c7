use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use shared::{AutoGenerateResponse, Shift};
use tracing::info;

use super::{domain_error, AdminSession, ApiError};
use crate::AppState;

/// Query parameters for the shift list endpoint
#[derive(Deserialize, Debug)]
pub struct ShiftRangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct AutoGenerateQuery {
    pub start_date: String,
    pub end_date: String,
}

/// GET /shifts/
pub async fn list_shifts(
    State(app_state): State<AppState>,
    Query(query): Query<ShiftRangeQuery>,
) -> Result<Json<Vec<Shift>>, ApiError> {
    info!("GET /shifts/ - query: {:?}", query);

    app_state
        .shift_service
        .list_shifts(query.start.as_deref(), query.end.as_deref())
        .await
        .map(Json)
        .map_err(domain_error)
}

/// POST /shifts
pub async fn create_shift(
    State(app_state): State<AppState>,
    _admin: AdminSession,
    Json(shift): Json<Shift>,
) -> Result<(StatusCode, Json<Shift>), ApiError> {
    info!("POST /shifts - date: {}", shift.date);

    let created = app_state
        .shift_service
        .create_shift(shift)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /shifts/auto-generate
pub async fn auto_generate_shifts(
    State(app_state): State<AppState>,
    _admin: AdminSession,
    Query(query): Query<AutoGenerateQuery>,
) -> Result<Json<AutoGenerateResponse>, ApiError> {
    info!("POST /shifts/auto-generate - {} to {}", query.start_date, query.end_date);

    app_state
        .shift_service
        .auto_generate(&query.start_date, &query.end_date)
        .await
        .map(Json)
        .map_err(domain_error)
}

/// PATCH /shifts/:date/:work_type
pub async fn update_shift(
    State(app_state): State<AppState>,
    _admin: AdminSession,
    Path((date, work_type)): Path<(String, String)>,
) -> Result<Json<Shift>, ApiError> {
    info!("PATCH /shifts/{}/{}", date, work_type);

    app_state
        .shift_service
        .update_shift(&date, &work_type)
        .await
        .map(Json)
        .map_err(domain_error)
}
