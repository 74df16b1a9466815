//! HTTP catalog fetcher for the price comparison.

use async_trait::async_trait;
use tracing::info;

use super::client::HttpClient;
use super::dto::CatalogResponse;
use crate::domain::CatalogSnapshot;
use crate::error::CatalogError;
use crate::infrastructure::config::{ComparisonConfig, RetailerConfig};
use crate::port::CatalogFetcher;

/// Fetches both retailers' price lists from the comparison endpoint.
pub struct HttpCatalogFetcher {
    client: HttpClient,
    url: String,
    retailers: Vec<RetailerConfig>,
}

impl HttpCatalogFetcher {
    pub fn new(client: HttpClient, url: impl Into<String>, retailers: Vec<RetailerConfig>) -> Self {
        Self {
            client,
            url: url.into(),
            retailers,
        }
    }

    #[must_use]
    pub fn from_config(config: &ComparisonConfig) -> Self {
        Self::new(
            HttpClient::from_config(&config.http),
            config.url.clone(),
            config.retailers.clone(),
        )
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch_catalogs(&self) -> Result<CatalogSnapshot, CatalogError> {
        info!(url = %self.url, "Fetching retailer catalogs");
        let response: CatalogResponse = self.client.get_json(&self.url).await?;
        response.into_snapshot(&self.retailers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(server: &MockServer) -> HttpCatalogFetcher {
        HttpCatalogFetcher::new(
            HttpClient::new(),
            format!("{}/api/compare-prices", server.uri()),
            vec![
                RetailerConfig::new("rema1000", "Rema 1000"),
                RetailerConfig::new("netto", "Netto"),
            ],
        )
    }

    #[tokio::test]
    async fn fetches_and_decodes_catalogs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/compare-prices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "rema1000": [{ "product_id": "p1", "price": 20, "sale_price": 15 }],
                "netto": [],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let snapshot = fetcher(&server).fetch_catalogs().await.unwrap();

        let entry = snapshot.retailers()[0].get(&ProductId::new("p1")).unwrap();
        assert_eq!(entry.effective_price(), dec!(15));
        assert!(snapshot.retailers()[1].is_empty());
        server.verify().await;
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = fetcher(&server).fetch_catalogs().await;

        assert!(matches!(result, Err(CatalogError::Http(_))));
    }

    #[tokio::test]
    async fn unsuccessful_flag_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
            .mount(&server)
            .await;

        let result = fetcher(&server).fetch_catalogs().await;

        assert!(matches!(result, Err(CatalogError::Unsuccessful)));
    }
}
