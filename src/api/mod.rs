//! Typed client for the directory backend.
//!
//! One method per backend operation. Every call goes through
//! [`ApiClient::send`]: non-2xx statuses become [`ApiError::Http`] and
//! successful bodies are classified into a [`Payload`] before being decoded.

pub mod payload;
pub mod token_store;
pub mod transport;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    AccessToken, ApprovalStatus, EntityId, NewReview, NewTool, NewUser, PasswordChange,
    RegisterAck, Review, Tool, ToolFilter, ToolPatch, UserProfile,
};
use leptos::logging::{error, log};
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

pub use payload::Payload;
pub use token_store::{LocalTokenStore, MemoryTokenStore, TokenStorage, TOKEN_KEY};
pub use transport::{ApiRequest, ApiResponse, GlooTransport, HttpMethod, RequestBody, Transport};

/// Whether a call carries the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    None,
    Bearer,
}

/// Which review listing to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewListing {
    Pending,
    Approved,
    #[default]
    All,
}

impl ReviewListing {
    pub fn path(self) -> &'static str {
        match self {
            Self::Pending => "/admin/reviews/pending",
            Self::Approved => "/admin/reviews/approved",
            Self::All => "/admin/all_reviews",
        }
    }

    /// Value used by the status `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::All => "",
        }
    }

    pub fn from_select(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            _ => Self::All,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStorage>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn Transport>,
        tokens: Rc<dyn TokenStorage>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            transport,
            tokens,
        }
    }

    /// Client backed by `fetch` and `localStorage`.
    pub fn browser(config: ClientConfig) -> Self {
        let transport = Rc::new(GlooTransport::new(config.request_timeout_ms()));
        Self::new(config, transport, Rc::new(LocalTokenStore))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &dyn TokenStorage {
        self.tokens.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.has_token()
    }

    pub fn logout(&self) {
        self.tokens.remove();
    }

    /// Full URL of the tool search, without query parameters when the filter is empty.
    pub fn tools_search_url(&self, filter: &ToolFilter) -> String {
        format!(
            "{}{}",
            self.config.endpoint("/admin/tools/search"),
            filter.query_string()
        )
    }

    async fn send(
        &self,
        method: HttpMethod,
        url: String,
        auth: Auth,
        body: RequestBody,
    ) -> Result<Payload<Value>, ApiError> {
        let bearer = match auth {
            Auth::Bearer => self.tokens.get(),
            Auth::None => None,
        };
        log!("[API] {} {}", method.as_str(), url);
        let request = ApiRequest {
            method,
            url,
            bearer,
            body,
        };
        let url = request.url.clone();

        let response = self.transport.send(request).await.map_err(|err| {
            error!("[API] {} {} failed: {}", method.as_str(), url, err);
            err
        })?;
        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            error!("[API] {} {} -> {}: {}", method.as_str(), url, response.status, err);
            return Err(err);
        }
        Ok(Payload::classify(&response.body))
    }

    async fn get(&self, path: &str) -> Result<Payload<Value>, ApiError> {
        self.send(HttpMethod::Get, self.config.endpoint(path), Auth::Bearer, RequestBody::Empty)
            .await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        auth: Auth,
        body: &B,
    ) -> Result<Payload<Value>, ApiError> {
        let json = serde_json::to_string(body)?;
        self.send(method, self.config.endpoint(path), auth, RequestBody::Json(json))
            .await
    }

    // ---- auth ----

    /// `POST /auth/`; returns the server's acknowledgement message.
    pub async fn register(&self, user: &NewUser) -> Result<String, ApiError> {
        let ack: RegisterAck = self
            .send_json(HttpMethod::Post, "/auth/", Auth::None, user)
            .await?
            .into_model()?;
        Ok(ack.msg)
    }

    /// `POST /auth/token` with form-encoded credentials. The token is not stored here.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, ApiError> {
        let form = format!(
            "username={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(password)
        );
        self.send(
            HttpMethod::Post,
            self.config.endpoint("/auth/token"),
            Auth::None,
            RequestBody::Form(form),
        )
        .await?
        .into_model()
    }

    // ---- user ----

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/user/").await?.into_model()
    }

    /// `PUT /user/password`. Only the status matters.
    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.send_json(HttpMethod::Put, "/user/password", Auth::Bearer, change)
            .await
            .map(|_| ())
    }

    // ---- tools ----

    pub async fn list_tools(&self, filter: &ToolFilter) -> Result<Vec<Tool>, ApiError> {
        self.send(
            HttpMethod::Get,
            self.tools_search_url(filter),
            Auth::Bearer,
            RequestBody::Empty,
        )
        .await?
        .into_model()
    }

    pub async fn get_tool(&self, id: &EntityId) -> Result<Tool, ApiError> {
        self.get(&format!("/admin/tools/{}", id.path_segment()))
            .await?
            .into_model()
    }

    pub async fn add_tool(&self, tool: &NewTool) -> Result<Tool, ApiError> {
        self.send_json(HttpMethod::Post, "/admin/add_tool", Auth::Bearer, tool)
            .await?
            .into_model()
    }

    /// `PUT /admin/Update_tool/{id}`. The backend may answer with the tool,
    /// any other JSON, nothing, or plain text; all of those are success.
    /// Only a `detail`-only body is a refusal.
    pub async fn update_tool(&self, id: &EntityId, patch: &ToolPatch) -> Result<Payload<Value>, ApiError> {
        let path = format!("/admin/Update_tool/{}", id.path_segment());
        self.send_json(HttpMethod::Put, &path, Auth::Bearer, patch)
            .await?
            .accept()
    }

    pub async fn delete_tool(&self, id: &EntityId) -> Result<(), ApiError> {
        let url = self
            .config
            .endpoint(&format!("/admin/delete_tool/{}", id.path_segment()));
        self.send(HttpMethod::Delete, url, Auth::Bearer, RequestBody::Empty)
            .await
            .map(|_| ())
    }

    // ---- reviews ----

    pub async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.send_json(HttpMethod::Post, "/admin/user_add_review", Auth::Bearer, review)
            .await?
            .into_model()
    }

    pub async fn reviews(&self, listing: ReviewListing) -> Result<Vec<Review>, ApiError> {
        self.get(listing.path()).await?.into_model()
    }

    pub async fn approved_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.reviews(ReviewListing::Approved).await
    }

    pub async fn pending_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.reviews(ReviewListing::Pending).await
    }

    pub async fn all_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.reviews(ReviewListing::All).await
    }

    /// `PUT /admin/approve_review/{id}?approval_status=...`
    pub async fn set_review_status(
        &self,
        id: &EntityId,
        status: ApprovalStatus,
    ) -> Result<Review, ApiError> {
        let url = self.config.endpoint(&format!(
            "/admin/approve_review/{}?approval_status={}",
            id.path_segment(),
            status.as_str()
        ));
        self.send(HttpMethod::Put, url, Auth::Bearer, RequestBody::Empty)
            .await?
            .into_model()
    }

    pub async fn approve_review(&self, id: &EntityId) -> Result<Review, ApiError> {
        self.set_review_status(id, ApprovalStatus::Approved).await
    }

    pub async fn reject_review(&self, id: &EntityId) -> Result<Review, ApiError> {
        self.set_review_status(id, ApprovalStatus::Rejected).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl Transport for Unreachable {
        fn send(
            &self,
            _request: ApiRequest,
        ) -> futures::future::LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
            Box::pin(async { Err(ApiError::Network("offline".into())) })
        }
    }

    fn client() -> ApiClient {
        ApiClient::new(
            ClientConfig::default(),
            Rc::new(Unreachable),
            Rc::new(MemoryTokenStore::default()),
        )
    }

    #[test]
    fn search_url_without_filters_has_no_query() {
        assert_eq!(
            client().tools_search_url(&ToolFilter::default()),
            "http://127.0.0.1:8080/admin/tools/search"
        );
    }

    #[test]
    fn search_url_with_min_rating_only() {
        let url = client().tools_search_url(&ToolFilter::default().min_rating("4"));
        assert!(url.ends_with("/admin/tools/search?min_rating=4"));
        assert!(!url.contains("category"));
        assert!(!url.contains("pricing_type"));
    }

    #[test]
    fn review_listing_select_values() {
        assert_eq!(ReviewListing::from_select("PENDING"), ReviewListing::Pending);
        assert_eq!(ReviewListing::from_select("APPROVED"), ReviewListing::Approved);
        assert_eq!(ReviewListing::from_select(""), ReviewListing::All);
        assert_eq!(ReviewListing::All.path(), "/admin/all_reviews");
    }
}
