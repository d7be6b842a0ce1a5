#![allow(dead_code)]

pub mod transport;

use std::rc::Rc;
use tooldeck::api::{ApiClient, MemoryTokenStore};
use tooldeck::config::ClientConfig;

pub use transport::MockTransport;

pub const BASE: &str = "http://api.test";

/// Client talking to `transport`, with `token` already stored when given.
pub fn client(transport: &Rc<MockTransport>, token: Option<&str>) -> ApiClient {
    let config = ClientConfig::builder()
        .api_base_url(BASE)
        .build()
        .expect("test base url is valid");
    let tokens = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::default(),
    };
    ApiClient::new(config, transport.clone(), Rc::new(tokens))
}
