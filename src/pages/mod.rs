//! One controller per page.
//!
//! Each module exposes its behavior as plain async functions over an
//! [`ApiClient`](crate::api::ApiClient) returning what the page should show,
//! and a `#[component]` that wires those functions to the DOM.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod profile;
pub mod tool_detail;

pub use admin::AdminPage;
pub use auth::AuthPage;
pub use catalog::CatalogPage;
pub use profile::ProfilePage;
pub use tool_detail::ToolDetailPage;

use crate::api::ApiClient;
use crate::app::routes;
use crate::utils::browser;
use leptos_router::NavigateOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline banner message shown next to a form or section.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

/// A page refusing to render: where to go instead, and what to tell the user first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub alert: Option<&'static str>,
}

impl Redirect {
    pub fn to_auth() -> Self {
        Self {
            to: routes::AUTH,
            alert: None,
        }
    }

    pub fn with_alert(to: &'static str, alert: &'static str) -> Self {
        Self {
            to,
            alert: Some(alert),
        }
    }

    pub fn follow(&self, navigate: impl Fn(&str, NavigateOptions)) {
        if let Some(message) = self.alert {
            browser::alert(message);
        }
        navigate(self.to, NavigateOptions::default());
    }
}

/// Pages behind a login bounce anonymous visitors before fetching anything.
pub fn require_login(client: &ApiClient) -> Result<(), Redirect> {
    if client.is_logged_in() {
        Ok(())
    } else {
        Err(Redirect::to_auth())
    }
}
