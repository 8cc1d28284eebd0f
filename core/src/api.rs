//! Request building and response decoding shared by every resource client.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{
    HttpMethod, HttpRequest, HttpResponse, ACCEPT, ACCEPT_LANGUAGE, APPLICATION_JSON, CONTENT_TYPE,
};
use crate::transport::Transport;

/// Base URL plus the headers every request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    base_url: String,
    accept_language: String,
}

impl Endpoint {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            accept_language: config.accept_language.clone(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: self.default_headers(),
            body: None,
        }
    }

    pub(crate) fn post_json<B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = self.default_headers();
        headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers,
            body: Some(body),
        })
    }

    fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
            (ACCEPT_LANGUAGE.to_string(), self.accept_language.clone()),
        ]
    }
}

pub(crate) fn send<T: Transport>(
    transport: &T,
    request: &HttpRequest,
) -> Result<HttpResponse, ApiError> {
    debug!(method = request.method.as_str(), url = %request.url, "sending request");
    transport.execute(request)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    debug!(status = response.status, "received response");
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::ItemNotFound);
    }
    Err(ApiError::UnknownError {
        status: response.status,
    })
}

/// Decode a success body, treating an empty body or JSON `null` as absent.
pub(crate) fn parse_optional<T: DeserializeOwned>(
    response: &HttpResponse,
) -> Result<Option<T>, ApiError> {
    check_status(response)?;
    if response.body.trim().is_empty() {
        debug!(status = response.status, "empty response body");
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(&response.body).map_err(decode_error)
}

/// Decode a success body that must be present.
pub(crate) fn parse_required<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    parse_optional(response)?
        .ok_or_else(|| ApiError::NetworkError("response body is empty".to_string()))
}

fn decode_error(e: serde_json::Error) -> ApiError {
    warn!(error = %e, "failed to decode response body");
    ApiError::NetworkError(format!("invalid response body: {e}"))
}
