//! Catalog source fetching skips by location from a skip-hire HTTP API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use skiphire_core::{
    model::{CatalogQuery, SkipOffering},
    ports::{CatalogPort, PortError},
};

/// Catalog source calling `GET {base_url}/skips/by-location`.
pub struct HttpCatalogPort {
    client: Client,
    base_url: String,
}

impl HttpCatalogPort {
    /// Create a new catalog port bound to the given HTTP client and API root.
    #[must_use]
    pub fn new<U: Into<String>>(client: Client, base_url: U) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn request(&self, query: &CatalogQuery) -> RequestBuilder {
        let mut params = vec![("postcode", query.postcode.trim())];
        if let Some(area) = query.area() {
            params.push(("area", area));
        }

        self.client
            .get(format!("{}/skips/by-location", self.base_url))
            .query(&params)
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogPort {
    fn name(&self) -> &str {
        "http"
    }

    async fn offerings(&self, query: &CatalogQuery) -> Result<Vec<SkipOffering>, PortError> {
        if query.is_empty() {
            return Err(PortError::InvalidQuery("postcode is required".into()));
        }

        debug!(base_url = %self.base_url, %query, "requesting skip catalog");
        fetch_json::<Vec<SkipOffering>>(self.request(query)).await
    }
}

/// Build a shareable HTTP source.
#[must_use]
pub fn catalog_port<U: Into<String>>(client: Client, base_url: U) -> Arc<dyn CatalogPort> {
    Arc::new(HttpCatalogPort::new(client, base_url))
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    let body = req
        .send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .bytes()
        .await
        .map_err(PortError::from)?;

    decode(&body)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, PortError> {
    serde_json::from_slice(body).map_err(|err| PortError::Decode(err.to_string()))
}
