use reqwest::Response;
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    domain::{
        common::{NutritionConfig, entities::app_errors::CoreError},
        nutrition::{entities::FoodSearchHit, ports::FoodDataRepository},
    },
    infrastructure::{http::HttpSession, usda::mappers::SearchResponse},
};

const SEARCH_DATA_TYPES: [&str; 2] = ["Foundation", "SR Legacy"];

/// USDA FoodData Central REST client.
#[derive(Debug)]
pub struct UsdaFoodDataClient {
    api_key: Option<String>,
    base_url: String,
    session: HttpSession,
}

impl UsdaFoodDataClient {
    pub fn new(config: &NutritionConfig) -> Self {
        let api_key = config
            .usda_api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if api_key.is_none() {
            warn!("USDA API key not configured, nutrition lookups will use local data only");
        }

        Self {
            api_key,
            base_url: config.usda_base_url.trim_end_matches('/').to_string(),
            session: HttpSession::new("usda", config.request_timeout),
        }
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| CoreError::SourceUnavailable("USDA API key not configured".to_string()))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, CoreError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::SourceUnavailable("USDA request timed out".to_string())
            } else {
                CoreError::ExternalServiceError(format!("USDA request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "USDA API error");
            return Err(CoreError::ExternalServiceError(format!(
                "USDA API returned {status}"
            )));
        }

        Ok(response)
    }
}

impl FoodDataRepository for UsdaFoodDataClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_foods(
        &self,
        query: String,
        page_size: u32,
    ) -> Result<Vec<FoodSearchHit>, CoreError> {
        let api_key = self.api_key()?;
        let client = self.session.client().await?;

        let mut params: Vec<(&str, String)> = vec![
            ("api_key", api_key.to_string()),
            ("query", query),
            ("pageSize", page_size.to_string()),
        ];
        params.extend(
            SEARCH_DATA_TYPES
                .iter()
                .map(|data_type| ("dataType", (*data_type).to_string())),
        );
        params.push(("sortBy", "dataType.keyword".to_string()));
        params.push(("sortOrder", "asc".to_string()));

        let request = client
            .get(format!("{}/foods/search", self.base_url))
            .query(&params);

        let body: SearchResponse = self.send(request).await?.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("invalid USDA search response: {e}"))
        })?;

        Ok(body.into_hits())
    }

    async fn get_food_details(&self, fdc_id: u64) -> Result<Value, CoreError> {
        let api_key = self.api_key()?;
        let client = self.session.client().await?;

        let request = client
            .get(format!("{}/food/{fdc_id}", self.base_url))
            .query(&[("api_key", api_key), ("format", "abridged")]);

        self.send(request).await?.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("invalid USDA food response: {e}"))
        })
    }

    async fn close(&self) {
        self.session.close().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(key: Option<&str>) -> NutritionConfig {
        NutritionConfig {
            usda_api_key: key.map(str::to_string),
            usda_base_url: "http://127.0.0.1:9/fdc/v1/".to_string(),
            request_timeout: Duration::from_millis(200),
        }
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable_without_network() {
        let client = UsdaFoodDataClient::new(&config(Some("  ")));
        assert!(!client.is_configured());

        let result = client.search_foods("apple".to_string(), 5).await;
        assert!(matches!(result, Err(CoreError::SourceUnavailable(_))));
        assert!(!client.session.is_open().await);
    }

    #[tokio::test]
    async fn test_unresponsive_source_times_out_as_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = UsdaFoodDataClient::new(&NutritionConfig {
            usda_api_key: Some("key".to_string()),
            usda_base_url: format!("http://{addr}/fdc/v1"),
            request_timeout: Duration::from_millis(200),
        });

        let result = client.search_foods("apple".to_string(), 5).await;
        assert!(matches!(result, Err(CoreError::SourceUnavailable(_))));

        let result = client.get_food_details(1750340).await;
        assert!(matches!(result, Err(CoreError::SourceUnavailable(_))));
        drop(listener);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = UsdaFoodDataClient::new(&config(Some("key")));
        assert!(client.is_configured());
        assert_eq!(client.base_url, "http://127.0.0.1:9/fdc/v1");
    }
}
