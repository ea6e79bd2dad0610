use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::error::CatalogError;
use crate::catalog::model::{ProductDetail, ProductPage};
use crate::config::CatalogConfig;

/// HTTP client for the product catalog.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder().build().map_err(CatalogError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first page of the product collection.
    pub async fn list_products(&self) -> Result<ProductPage, CatalogError> {
        let url = format!("{}/products", self.base_url);
        self.get_json(url).await
    }

    /// Fetch one product with its full attribute set.
    pub async fn get_product(&self, id: u64) -> Result<ProductDetail, CatalogError> {
        let url = format!("{}/products/{}", self.base_url, id);
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Network {
                url: url.clone(),
                source,
            })?;

        // Error documents are decoded like any other body and fail on shape.
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Network {
                url: url.clone(),
                source,
            })?;
        debug!(%url, status, bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            url,
            status,
            source,
        })
    }
}
