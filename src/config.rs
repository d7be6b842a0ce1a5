//! Client configuration, resolved once when the app starts.

use thiserror::Error;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

/// `<meta>` tag the host page may use to point the client at a backend.
pub const API_BASE_META_NAME: &str = "api-base-url";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    api_base_url: String,
    request_timeout_ms: u32,
    search_debounce_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Resolve the base URL from the host page's `<meta>` tag, then the
    /// compile-time `API_BASE_URL` variable, then the built-in default.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(url) = crate::utils::browser::meta_content(API_BASE_META_NAME) {
            builder = builder.api_base_url(url);
        } else if let Some(url) = option_env!("API_BASE_URL") {
            builder = builder.api_base_url(url);
        }
        builder.build()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn request_timeout_ms(&self) -> u32 {
        self.request_timeout_ms
    }

    pub fn search_debounce_ms(&self) -> u32 {
        self.search_debounce_ms
    }

    /// Full URL for a backend path such as `/user/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
    search_debounce_ms: Option<u32>,
}

impl ClientConfigBuilder {
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn request_timeout_ms(mut self, ms: u32) -> Self {
        self.request_timeout_ms = Some(ms);
        self
    }

    pub fn search_debounce_ms(mut self, ms: u32) -> Self {
        self.search_debounce_ms = Some(ms);
        self
    }

    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let raw = self
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = raw.trim().trim_end_matches('/').to_string();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://"))
            || api_base_url.contains(char::is_whitespace)
        {
            return Err(ConfigError::InvalidUrl(raw));
        }

        let request_timeout_ms = self.request_timeout_ms.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        if request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue("request_timeout_ms"));
        }
        let search_debounce_ms = self.search_debounce_ms.unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);
        if search_debounce_ms == 0 {
            return Err(ConfigError::InvalidValue("search_debounce_ms"));
        }

        Ok(ClientConfig {
            api_base_url,
            request_timeout_ms,
            search_debounce_ms,
        })
    }
}
