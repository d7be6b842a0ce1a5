//! The seam between [`ApiClient`](super::ApiClient) and the network.

use crate::error::ApiError;
use futures::future::{select, Either, LocalBoxFuture};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON document.
    Json(String),
    /// `application/x-www-form-urlencoded` payload.
    Form(String),
}

impl RequestBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
            Self::Form(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can execute an [`ApiRequest`].
///
/// Futures are not `Send`: everything runs on the browser's UI thread.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>>;
}

/// `fetch`-backed transport with a per-request timeout.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Transport for GlooTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        let timeout_ms = self.timeout_ms;
        Box::pin(async move {
            let controller = web_sys::AbortController::new()
                .map_err(|err| ApiError::Network(format!("{err:?}")))?;
            let signal = controller.signal();

            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            }
            .abort_signal(Some(&signal));
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            if let Some(content_type) = request.body.content_type() {
                builder = builder.header("Content-Type", content_type);
            }

            let prepared = attach_body(builder, request.body)
                .map_err(|err| ApiError::Network(err.to_string()))?;

            let send = prepared.send();
            let timer = TimeoutFuture::new(timeout_ms);
            futures::pin_mut!(send);
            futures::pin_mut!(timer);

            match select(send, timer).await {
                Either::Left((result, _)) => {
                    let response = result.map_err(|err| ApiError::Network(err.to_string()))?;
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .map_err(|err| ApiError::Network(err.to_string()))?;
                    Ok(ApiResponse { status, body })
                }
                Either::Right(_) => {
                    warn!("[API] {} {} timed out", request.method.as_str(), request.url);
                    controller.abort();
                    Err(ApiError::Timeout(timeout_ms))
                }
            }
        })
    }
}

fn attach_body(builder: RequestBuilder, body: RequestBody) -> Result<Request, gloo_net::Error> {
    match body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(json) => builder.body(json),
        RequestBody::Form(form) => builder.body(form),
    }
}
