//! Gateway for every outbound call to the BudgetAI backend.
//!
//! DESIGN
//! ======
//! A call is first built into a [`PreparedRequest`] (URL, headers, body,
//! credential mode) by pure code, then handed to `gloo-net` in hydrate
//! builds. Status and body handling are likewise pure helpers so the whole
//! contract is testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per call, no retry. Non-2xx statuses, transport failures and
//! undecodable bodies all surface as [`ApiError`]; callers turn them into UI
//! feedback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Backend origin used when `BUDGETAI_API_URL` is not set at build time.
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8080";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Backend origin baked in at compile time.
pub fn api_origin() -> &'static str {
    option_env!("BUDGETAI_API_URL").unwrap_or(DEFAULT_API_ORIGIN)
}

/// Failure of a gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("Error: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("not available on server")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One file in a multipart upload.
#[derive(Clone, Debug)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

impl FilePart {
    #[cfg(feature = "hydrate")]
    pub fn from_file(field: &str, file: web_sys::File) -> Self {
        Self { field: field.to_owned(), file_name: file.name(), file }
    }
}

/// File-bearing request payload.
#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    parts: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new(parts: Vec<FilePart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[FilePart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        for part in &self.parts {
            form.append_with_blob_and_filename(&part.field, &part.file, &part.file_name)
                .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        }
        Ok(form)
    }
}

/// Request payload before encoding.
#[derive(Clone, Debug)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Wrap any serializable value as a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `value` cannot be represented as JSON.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// Encoded body ready for the transport.
#[derive(Clone, Debug)]
pub enum PreparedBody {
    Empty,
    Json(String),
    Multipart(MultipartForm),
}

/// Fully-resolved request: what goes on the wire.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(&'static str, String)>,
    pub body: PreparedBody,
    pub include_credentials: bool,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Join the backend origin and an endpoint path with exactly one slash.
pub fn endpoint_url(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build the wire request for `path`.
///
/// Multipart bodies get no content type so the browser can add the
/// boundary; JSON bodies are serialized and labelled `application/json`.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if the JSON body cannot be serialized.
pub fn prepare(
    origin: &str,
    path: &str,
    method: Method,
    body: Option<RequestBody>,
) -> Result<PreparedRequest, ApiError> {
    let mut headers = Vec::new();
    let body = match body {
        None => PreparedBody::Empty,
        Some(RequestBody::Multipart(form)) => PreparedBody::Multipart(form),
        Some(RequestBody::Json(value)) => {
            let raw = serde_json::to_string(&value).map_err(|e| ApiError::Encode(e.to_string()))?;
            headers.push((CONTENT_TYPE, JSON_CONTENT_TYPE.to_owned()));
            PreparedBody::Json(raw)
        }
    };
    Ok(PreparedRequest {
        url: endpoint_url(origin, path),
        method,
        headers,
        body,
        include_credentials: true,
    })
}

/// Map an HTTP status to success or [`ApiError::Status`].
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any status outside `200..=299`. An empty
/// status text (common over HTTP/2) is replaced by the numeric code.
pub fn check_status(status: u16, status_text: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let status_text = if status_text.trim().is_empty() {
        status.to_string()
    } else {
        status_text.to_owned()
    };
    Err(ApiError::Status { status, status_text })
}

/// Decode a response body as JSON.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for empty or malformed bodies.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    if raw.trim().is_empty() {
        return Err(ApiError::Decode("empty response body".to_owned()));
    }
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue one request to the backend and decode the JSON reply.
///
/// # Errors
///
/// See [`ApiError`]. Outside hydrate builds this always returns
/// [`ApiError::Unavailable`].
pub async fn request<T: DeserializeOwned>(
    path: &str,
    method: Method,
    body: Option<RequestBody>,
) -> Result<T, ApiError> {
    let prepared = prepare(api_origin(), path, method, body)?;
    #[cfg(feature = "hydrate")]
    {
        send(prepared).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prepared;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(prepared: PreparedRequest) -> Result<T, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match prepared.method {
        Method::Get => Request::get(&prepared.url),
        Method::Post => Request::post(&prepared.url),
    };
    if prepared.include_credentials {
        builder = builder.credentials(web_sys::RequestCredentials::Include);
    }
    for (name, value) in &prepared.headers {
        builder = builder.header(name, value);
    }
    let request = match prepared.body {
        PreparedBody::Empty => builder.build(),
        PreparedBody::Json(raw) => builder.body(raw),
        PreparedBody::Multipart(form) => builder.body(form.to_form_data()?),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp.status(), &resp.status_text())?;
    let raw = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_json(&raw)
}
