use gloo::net::http::{Request, RequestBuilder, Response};
use shared::session::{self, ResponseDisposition, SESSION_RESPONSE_HEADER};
use shared::{LoginRequest, Shift};
use std::future::Future;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::config;
use crate::services::logging::Logger;
use crate::services::session::{BrowserNavigator, BrowserSession};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// API client for communicating with the shift backend.
///
/// Every request goes through [`ApiClient::prepare`] and
/// [`ApiClient::dispatch`], which own the credential header and the
/// 401 policy.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(config::api_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn shifts_url(&self, start: &str, end: &str) -> String {
        self.url(&format!(
            "/shifts/?start={}&end={}",
            js_sys::encode_uri_component(start),
            js_sys::encode_uri_component(end)
        ))
    }

    pub fn shift_update_url(&self, date: &str, work_type: &str) -> String {
        self.url(&format!(
            "/shifts/{}/{}",
            js_sys::encode_uri_component(date),
            js_sys::encode_uri_component(work_type)
        ))
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include);

        match session::credential_header(&BrowserSession) {
            Some((name, value)) => builder.header(name, &value),
            None => builder,
        }
    }

    async fn dispatch<F>(&self, request: F) -> Result<Response, ApiError>
    where
        F: Future<Output = Result<Response, gloo::net::Error>>,
    {
        let response = request
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match session::intercept_status(response.status(), &BrowserSession, &BrowserNavigator) {
            ResponseDisposition::Unauthorized => {
                Logger::warn_with_component("api", "Session rejected, credential cleared");
                Err(ApiError::Unauthorized)
            }
            ResponseDisposition::PassThrough => Ok(response),
        }
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    /// Fetch every shift whose date lies in `[start, end]`
    pub async fn get_shifts(&self, start: &str, end: &str) -> Result<Vec<Shift>, ApiError> {
        let request = self.prepare(Request::get(&self.shifts_url(start, end)));
        let response = self.dispatch(request.send()).await?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Vec<Shift>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Override the work type of the shift on `date`
    pub async fn update_shift(&self, date: &str, work_type: &str) -> Result<Shift, ApiError> {
        let request = self.prepare(Request::patch(&self.shift_update_url(date, work_type)));
        let response = self.dispatch(request.send()).await?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Shift>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Log in with the admin password; yields the credential from the
    /// response header when the backend issued one.
    pub async fn login(&self, password: &str) -> Result<Option<String>, ApiError> {
        let body = LoginRequest {
            password: password.to_string(),
        };
        let request = self
            .prepare(Request::post(&self.url("/auth/login")))
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.dispatch(request.send()).await?;
        let response = Self::ensure_success(response).await?;

        Ok(response
            .headers()
            .get(SESSION_RESPONSE_HEADER)
            .filter(|credential| !credential.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[wasm_bindgen_test]
    fn test_shifts_url_carries_range() {
        let client = ApiClient::with_base_url("http://localhost:8000");
        assert_eq!(
            client.shifts_url("2025-08-11", "2027-04-21"),
            "http://localhost:8000/shifts/?start=2025-08-11&end=2027-04-21"
        );
    }

    #[wasm_bindgen_test]
    fn test_update_url_encodes_work_type() {
        let client = ApiClient::with_base_url("http://localhost:8000");
        assert_eq!(
            client.shift_update_url("2025-08-12", "야"),
            "http://localhost:8000/shifts/2025-08-12/%EC%95%BC"
        );
    }
}
