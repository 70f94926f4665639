// ============================================================================
// API CLIENT - HTTP only, no business logic
// ============================================================================
// One method per verb against the backend base path. Every failure is shown
// to the user in a blocking alert, then returned for the caller to react to
// (usually by staying on the current screen). No retries, no backoff.
// ============================================================================

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::AbortController;

use crate::utils::API_BASE_URL;

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// The three ways a request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A response arrived with a non-success status. `detail` is the
    /// server-supplied message when present, the status text otherwise.
    #[error("Bad response: {detail}")]
    Rejected { status: u16, detail: String },
    /// The request was sent but no response came back (network down,
    /// timeout abort).
    #[error("Bad request: {0}")]
    NoResponse(String),
    /// Everything else: building or serializing the request, decoding a
    /// success body.
    #[error("Unknown error: {0}")]
    Other(String),
}

/// Stateless HTTP client. Constructed once in the app root and passed down
/// to the screens that need it, so tests can substitute the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
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
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        surface(self.get_inner(endpoint, params).await)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        surface(send_json_inner(Request::post(&self.url(endpoint)), body).await)
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        surface(send_json_inner(Request::patch(&self.url(endpoint)), body).await)
    }

    pub async fn delete(&self, endpoint: &str, params: &[(&str, String)]) -> Result<(), ApiError> {
        surface(self.delete_inner(endpoint, params).await)
    }

    async fn get_inner<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let controller = new_controller()?;
        let request = Request::get(&self.url(endpoint))
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .abort_signal(Some(&controller.signal()))
            .build()
            .map_err(|err| ApiError::Other(err.to_string()))?;

        let response = send_with_timeout(request, controller).await?;
        decode(ensure_success(response).await?).await
    }

    async fn delete_inner(&self, endpoint: &str, params: &[(&str, String)]) -> Result<(), ApiError> {
        let controller = new_controller()?;
        let request = Request::delete(&self.url(endpoint))
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .abort_signal(Some(&controller.signal()))
            .build()
            .map_err(|err| ApiError::Other(err.to_string()))?;

        let response = send_with_timeout(request, controller).await?;
        ensure_success(response).await.map(|_| ())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim())
    }
}

async fn send_json_inner<B: Serialize, T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let controller = new_controller()?;
    let request = builder
        .abort_signal(Some(&controller.signal()))
        .json(body)
        .map_err(|err| ApiError::Other(err.to_string()))?;

    let response = send_with_timeout(request, controller).await?;
    decode(ensure_success(response).await?).await
}

fn new_controller() -> Result<AbortController, ApiError> {
    AbortController::new().map_err(|_| ApiError::Other("cannot create AbortController".to_string()))
}

async fn send_with_timeout(
    request: Request,
    controller: AbortController,
) -> Result<Response, ApiError> {
    let abort = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
    let result = request.send().await;
    // request settled, cancel the pending abort
    drop(abort);
    result.map_err(|err| ApiError::NoResponse(err.to_string()))
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status,
        detail: detail_from_body(&body, &status_text),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Other(err.to_string()))
}

/// The backend reports errors as `{"detail": ...}`. Fall back to the status
/// text when the body is something else.
fn detail_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value.get("detail").map(|detail| match detail {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Show the failure to the user, then hand the error back to the caller.
fn surface<T>(result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        log::error!("💥 API call failed: {err}");
        alert(&err.to_string());
    }
    result
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_trimmed() {
        let client = ApiClient::with_base_url("/api");
        assert_eq!(client.url("  /flights "), "/api/flights");
    }

    #[test]
    fn detail_field_is_extracted_verbatim() {
        assert_eq!(
            detail_from_body("{\"detail\": \"Flight not found\"}", "Not Found"),
            "Flight not found"
        );
    }

    #[test]
    fn non_string_detail_is_stringified() {
        assert_eq!(
            detail_from_body("{\"detail\": {\"code\": 3}}", "Bad Request"),
            "{\"code\":3}"
        );
    }

    #[test]
    fn missing_detail_falls_back_to_status_text() {
        assert_eq!(detail_from_body("<html>oops</html>", "Bad Gateway"), "Bad Gateway");
        assert_eq!(detail_from_body("{}", "Not Found"), "Not Found");
    }

    #[test]
    fn error_messages_name_the_failure_kind() {
        let rejected = ApiError::Rejected {
            status: 404,
            detail: "Flight not found".to_string(),
        };
        assert_eq!(rejected.to_string(), "Bad response: Flight not found");
        assert_eq!(
            ApiError::NoResponse("timed out".to_string()).to_string(),
            "Bad request: timed out"
        );
        assert_eq!(
            ApiError::Other("bad json".to_string()).to_string(),
            "Unknown error: bad json"
        );
    }
}
