//! Champion catalog client (single GET, no retry).

use crate::core::catalog::{CatalogError, Character, decode_catalog};
use gloo_net::http::Request;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CatalogClient {
    pub endpoint: String,
}

impl CatalogClient {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Fetch and decode the whole catalog. Transport, status, and decode failures
    /// all surface as one error.
    pub(crate) async fn fetch_collection(&self) -> anyhow::Result<Vec<Character>> {
        let response = Request::get(&self.endpoint).send().await?;
        if !response.ok() {
            return Err(CatalogError::Status(response.status()).into());
        }
        let body = response.text().await?;
        Ok(decode_catalog(&body)?)
    }
}
