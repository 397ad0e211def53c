use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};

use crate::backend::ProductStore;
use crate::config::StoreConfig;
use crate::error::ImportError;
use crate::model::{NewProduct, Variant};

/// REST implementation of [`ProductStore`] against the hosted catalog
/// backend.
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    /// Create a new store client from configuration
    pub fn new(config: &StoreConfig) -> Result<Self, ImportError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("CATALOG_API_KEY").ok());

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let mut value: HeaderValue = format!("Bearer {}", key).parse()?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(RestStore {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ImportError> {
        let config = StoreConfig::new(base_url.into(), None);
        Self::new(&config)
    }

    async fn post(
        &self,
        entity: &'static str,
        path: &str,
        body: Value,
    ) -> Result<Value, ImportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} ({})", url, entity);

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::Backend {
                entity,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await.unwrap_or(Value::Null))
    }
}

/// The backend returns either `{"id": ...}` or a one-element array of the
/// created row; the id itself may be a string or a number.
fn extract_id(value: &Value) -> Option<String> {
    let id = value
        .get("id")
        .or_else(|| value.get(0).and_then(|row| row.get("id")))?;
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl ProductStore for RestStore {
    fn store_name(&self) -> &str {
        "rest"
    }

    async fn create_product(&self, product: &NewProduct) -> Result<String, ImportError> {
        let value = self
            .post(
                "product",
                "/products",
                json!({
                    "name": product.name,
                    "code": product.code,
                    "status": product.status,
                }),
            )
            .await?;

        extract_id(&value).ok_or_else(|| ImportError::BadResponse {
            entity: "product",
            detail: format!("no id in response: {}", value),
        })
    }

    async fn create_variants(
        &self,
        product_id: &str,
        variants: &[Variant],
    ) -> Result<(), ImportError> {
        let rows: Vec<Value> = variants
            .iter()
            .map(|v| {
                json!({
                    "product_id": product_id,
                    "size": v.size,
                    "price": v.price,
                    "sku": v.sku,
                    "stock": 0,
                })
            })
            .collect();

        self.post("variants", "/variants", Value::Array(rows))
            .await?;
        Ok(())
    }

    async fn link_category(
        &self,
        product_id: &str,
        category_id: &str,
    ) -> Result<(), ImportError> {
        self.post(
            "category link",
            "/product-categories",
            json!({
                "product_id": product_id,
                "category_id": category_id,
            }),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_from_object() {
        assert_eq!(
            extract_id(&json!({"id": "abc", "name": "x"})),
            Some("abc".to_string())
        );
        assert_eq!(extract_id(&json!({"id": 42})), Some("42".to_string()));
    }

    #[test]
    fn test_extract_id_from_row_array() {
        assert_eq!(
            extract_id(&json!([{"id": "abc"}])),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_extract_id_missing() {
        assert_eq!(extract_id(&json!({"name": "x"})), None);
        assert_eq!(extract_id(&json!(null)), None);
        assert_eq!(extract_id(&json!({"id": true})), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store = RestStore::with_base_url("https://backend.example/").unwrap();
        assert_eq!(store.base_url, "https://backend.example");
    }
}
