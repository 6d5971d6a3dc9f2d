use async_trait::async_trait;
use serde::Deserialize;

use crate::core::{GatewayError, Result, YugiohCard};

/// Source of the read-only card catalog. A trait seam so the stores can be
/// exercised without the third-party API.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<YugiohCard>>;
}

/// The public catalog API wraps its payload in a `data` field.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: Vec<YugiohCard>,
}

/// Catalog client against the hosted card API.
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CardSource for HttpCatalog {
    async fn fetch_all(&self) -> Result<Vec<YugiohCard>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        let body: CatalogResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Backend(e.to_string()))?;
        Ok(body.data)
    }
}
