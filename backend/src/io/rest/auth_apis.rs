use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use shared::{AuthCheckResponse, LoginRequest, LoginResponse, LogoutResponse};
use tracing::info;

use super::{api_error, session_id_from_headers, ApiError};
use crate::AppState;

pub const SESSION_ID_RESPONSE_HEADER: HeaderName = HeaderName::from_static("x-session-id");
const SESSION_COOKIE: &str = "session_id";

fn session_cookie(session_id: &str, is_production: bool) -> String {
    if is_production {
        format!("{}={}; Path=/; HttpOnly; Secure; SameSite=Strict", SESSION_COOKIE, session_id)
    } else {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session_id)
    }
}

fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

/// POST /auth/login
///
/// Issues the session id both in the `X-Session-Id` header and as a cookie.
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /auth/login");

    let session_id = app_state
        .auth_service
        .login(&request.password)
        .map_err(|e| super::domain_error(e.into()))?;

    let header_value = HeaderValue::from_str(&session_id)
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "Invalid session id", "INTERNAL_ERROR"))?;
    let cookie_value = HeaderValue::from_str(&session_cookie(&session_id, app_state.config.is_production))
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "Invalid session cookie", "INTERNAL_ERROR"))?;

    let mut headers = HeaderMap::new();
    headers.insert(SESSION_ID_RESPONSE_HEADER, header_value);
    headers.insert(header::SET_COOKIE, cookie_value);

    Ok((
        headers,
        Json(LoginResponse {
            message: "로그인 성공".to_string(),
        }),
    ))
}

/// POST /auth/logout
pub async fn logout(State(app_state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(session_id) = session_id_from_headers(&headers) {
        app_state.auth_service.logout(&session_id);
    }
    info!("POST /auth/logout");

    let mut response_headers = HeaderMap::new();
    if let Ok(cookie) = HeaderValue::from_str(&expired_session_cookie()) {
        response_headers.insert(header::SET_COOKIE, cookie);
    }

    (
        response_headers,
        Json(LogoutResponse {
            message: "로그아웃 성공".to_string(),
        }),
    )
}

/// GET /auth/check
pub async fn check(State(app_state): State<AppState>, headers: HeaderMap) -> Json<AuthCheckResponse> {
    let authenticated = session_id_from_headers(&headers)
        .map(|session_id| app_state.auth_service.is_valid(&session_id))
        .unwrap_or(false);

    Json(AuthCheckResponse {
        authenticated,
        message: if authenticated { "로그인 중" } else { "로그인 필요" }.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use shared::{ApiErrorBody, AuthCheckResponse};

    #[tokio::test]
    async fn test_login_returns_session_header_and_cookie() {
        let (app, _temp_dir) = setup_test_app();

        let response = send(&app, Method::POST, "/auth/login", None, Some(json!({ "password": PASSWORD }))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-session-id"));
        let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
        assert!(cookie.starts_with("session_id="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let (app, _temp_dir) = setup_test_app();

        let response = send(&app, Method::POST, "/auth/login", None, Some(json!({ "password": "nope" }))).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!response.headers().contains_key("x-session-id"));
        let body: ApiErrorBody = json_body(response).await;
        assert_eq!(body.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_check_and_logout() {
        let (app, _temp_dir) = setup_test_app();
        let session_id = login(&app).await;

        let response = send(&app, Method::GET, "/auth/check", Some(&session_id), None).await;
        let check: AuthCheckResponse = json_body(response).await;
        assert!(check.authenticated);

        let response = send(&app, Method::POST, "/auth/logout", Some(&session_id), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::GET, "/auth/check", Some(&session_id), None).await;
        let check: AuthCheckResponse = json_body(response).await;
        assert!(!check.authenticated);
    }

    #[tokio::test]
    async fn test_check_without_header() {
        let (app, _temp_dir) = setup_test_app();

        let response = send(&app, Method::GET, "/auth/check", None, None).await;
        let check: AuthCheckResponse = json_body(response).await;
        assert!(!check.authenticated);
        assert_eq!(check.message, "로그인 필요");
    }
}
