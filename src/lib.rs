//! Browser client for the AI tool directory.
//!
//! Pages talk to the directory backend exclusively through [`api::ApiClient`];
//! everything else here is presentation.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod search;
pub mod utils;
