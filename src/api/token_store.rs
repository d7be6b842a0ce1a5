//! Where the bearer token lives between page loads.

use crate::error::ApiError;
use leptos::logging::warn;
use std::cell::RefCell;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

pub trait TokenStorage {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), ApiError>;
    fn remove(&self);

    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// Browser `localStorage`, under [`TOKEN_KEY`].
#[derive(Debug, Clone, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for LocalTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> Result<(), ApiError> {
        let storage =
            Self::storage().ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|err| ApiError::Storage(format!("{err:?}")))
    }

    fn remove(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(TOKEN_KEY).is_err() {
                warn!("[TOKEN] could not remove {}", TOKEN_KEY);
            }
        }
    }
}

/// Process-local store, for tests and hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) -> Result<(), ApiError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}
