//! Thin client for the hospital REST API, built directly on the browser
//! `fetch` API via `web-sys`. Transport and decoding are kept separate so
//! the decoding rules can be tested off-target.

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::model::{LoginRequest, LoginResponse, Profile, UserRecord};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("server returned status {code}")]
    Status { code: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the server attached to a rejected request, if any. Used to
    /// surface login failures verbatim.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        ApiClient { base: base.into() }
    }

    /// `POST /api/login` — trades credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_string(&LoginRequest { email, password })
            .map_err(|err| ApiError::Encode(err.to_string()))?;
        let (status, text) = self.request("POST", "/api/login", Some(&body), None).await?;
        decode_login(status, &text)
    }

    /// `GET /api/profile` — the authenticated user's own record.
    pub async fn fetch_profile(&self, token: &str) -> Result<Profile, ApiError> {
        let (status, text) = self.request("GET", "/api/profile", None, Some(token)).await?;
        decode_profile(status, &text)
    }

    /// `GET /api/admin/users` — every profile, admin only.
    pub async fn fetch_all_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        let (status, text) = self
            .request("GET", "/api/admin/users", None, Some(token))
            .await?;
        decode_user_list(status, &text)
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> Result<(u16, String), ApiError> {
        let mut opts = RequestInit::new();
        opts.method(method);
        if let Some(body) = body {
            opts.body(Some(&JsValue::from_str(body)));
        }

        let url = format!("{}{}", self.base, path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let headers: Headers = request.headers();
        if body.is_some() {
            headers
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }
        if let Some(token) = token {
            // The API expects the raw token, no `Bearer ` prefix.
            headers.set("Authorization", token).map_err(js_error)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("no window object available".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch resolved to a non-Response value".into()))?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok((status, text.as_string().unwrap_or_default()))
    }
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn decode_login(status: u16, body: &str) -> Result<LoginResponse, ApiError> {
    let body = check_status(status, body)?;
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn decode_profile(status: u16, body: &str) -> Result<Profile, ApiError> {
    let body = check_status(status, body)?;
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn decode_user_list(status: u16, body: &str) -> Result<Vec<UserRecord>, ApiError> {
    let body = check_status(status, body)?;
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn check_status(status: u16, body: &str) -> Result<&str, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status {
            code: status,
            message: extract_server_message(body),
        })
    }
}

/// Pulls a human-readable message out of an error response body. The API
/// answers rejections with either a bare JSON string or an object carrying
/// a `message`/`error` field; older deployments send plain text.
fn extract_server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(text)) if !text.is_empty() => Some(text),
        Ok(Value::Object(map)) => ["message", "error"].iter().find_map(|key| match map.get(*key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
