//! # REST API Interface Layer
//!
//! HTTP endpoints for the shift calendar. Handlers translate requests into
//! service calls and domain errors into status codes; they hold no business
//! logic of their own.

pub mod auth_apis;
pub mod shift_apis;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    Json,
};
use shared::session::SESSION_REQUEST_HEADER;
use shared::ApiErrorBody;
use tracing::error;

use crate::domain::{AuthError, ShiftError};
use crate::AppState;

/// Error response shape shared by every handler
pub type ApiError = (StatusCode, Json<ApiErrorBody>);

pub fn api_error(status: StatusCode, message: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ApiErrorBody {
            error: message.into(),
            code: code.to_string(),
        }),
    )
}

/// Map a service error onto an HTTP status
pub fn domain_error(err: anyhow::Error) -> ApiError {
    if let Some(shift_error) = err.downcast_ref::<ShiftError>() {
        return match shift_error {
            ShiftError::NotFound(_) => api_error(StatusCode::NOT_FOUND, shift_error.to_string(), "NOT_FOUND"),
            ShiftError::AlreadyExists(_) => api_error(StatusCode::CONFLICT, shift_error.to_string(), "CONFLICT"),
            ShiftError::InvalidDate(_) => api_error(StatusCode::BAD_REQUEST, shift_error.to_string(), "INVALID_INPUT"),
        };
    }
    if let Some(AuthError::InvalidPassword) = err.downcast_ref::<AuthError>() {
        return api_error(StatusCode::UNAUTHORIZED, "비밀번호가 잘못되었습니다.", "UNAUTHORIZED");
    }

    error!("Internal error: {:?}", err);
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", "INTERNAL_ERROR")
}

/// Session id sent by the client, if any
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_REQUEST_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Extractor guarding admin-only routes: requires a live `session-id`
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match session_id_from_headers(&parts.headers) {
            Some(session_id) if state.auth_service.is_valid(&session_id) => Ok(AdminSession { session_id }),
            _ => Err(api_error(StatusCode::UNAUTHORIZED, "로그인이 필요합니다.", "UNAUTHORIZED")),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::AppConfig;
    use crate::{create_router, initialize_backend};
    use axum::{
        body::Body,
        http::{Method, Request, Response},
        Router,
    };
    use serde::de::DeserializeOwned;
    use tempfile::TempDir;
    use tower::util::ServiceExt; // for `oneshot`

    pub const PASSWORD: &str = "test-password";

    pub fn setup_test_app() -> (Router, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state = initialize_backend(AppConfig::for_tests(temp_dir.path()))
            .expect("Failed to initialize backend");
        (create_router(state), temp_dir)
    }

    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        session_id: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(session_id) = session_id {
            builder = builder.header("session-id", session_id);
        }
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub async fn login(app: &Router) -> String {
        let response = send(
            app,
            Method::POST,
            "/auth/login",
            None,
            Some(serde_json::json!({ "password": PASSWORD })),
        )
        .await;
        response
            .headers()
            .get("x-session-id")
            .expect("login returns a session id")
            .to_str()
            .unwrap()
            .to_string()
    }
}
