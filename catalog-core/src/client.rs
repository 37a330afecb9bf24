//! HTTP client for the product service.
//!
//! Plain pass-through: no retries, no auth headers, no timeout beyond the platform
//! default. Non-2xx responses come back as [`ApiError::Status`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::CatalogConfig;
use crate::error::{ApiError, Result};
use crate::model::{NameFilter, Product};

/// Remote operations the catalog needs.
///
/// Mutations resolve to the 2xx status the service answered with, so callers can
/// decide which successes they accept.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ProductApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// `GET /products/{code}`; an empty body means no such product.
    async fn find_by_code(&self, code: u64) -> Result<Option<Product>>;

    /// `POST /products/search`
    async fn search_by_name(&self, description: &str) -> Result<Vec<Product>>;

    /// `POST /products`
    async fn create_product(&self, product: &Product) -> Result<StatusCode>;

    /// `PUT /products/{code}`
    async fn update_product(&self, code: u64, product: &Product) -> Result<StatusCode>;

    /// `DELETE /products/{code}`
    async fn delete_product(&self, code: u64) -> Result<StatusCode>;
}

#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpProductApi {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder, label: &str) -> Result<reqwest::Response> {
        log::debug!("Sending {}", label);

        let response = request.send().await.map_err(|e| {
            log::error!("{} failed: {}", label, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        log::debug!("{} answered {}", label, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("{} error body unreadable: {}", label, e);
                String::new()
            }
        };
        let message = extract_error_message(&body);
        log::error!("{} rejected with {}: {:?}", label, status, message);

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ProductApi for HttpProductApi {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let request = self.client.get(self.config.url("/products"));
        let response = self.send(request, "GET /products").await?;
        Self::decode(response).await
    }

    async fn find_by_code(&self, code: u64) -> Result<Option<Product>> {
        let path = format!("/products/{}", code);
        let request = self.client.get(self.config.url(&path));
        let response = self.send(request, &format!("GET {}", path)).await?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<Product>>(&body)?)
    }

    async fn search_by_name(&self, description: &str) -> Result<Vec<Product>> {
        let request = self
            .client
            .post(self.config.url("/products/search"))
            .json(&NameFilter::new(description));
        let response = self.send(request, "POST /products/search").await?;
        Self::decode(response).await
    }

    async fn create_product(&self, product: &Product) -> Result<StatusCode> {
        let request = self.client.post(self.config.url("/products")).json(product);
        let response = self.send(request, "POST /products").await?;
        Ok(response.status())
    }

    async fn update_product(&self, code: u64, product: &Product) -> Result<StatusCode> {
        let path = format!("/products/{}", code);
        let request = self.client.put(self.config.url(&path)).json(product);
        let response = self.send(request, &format!("PUT {}", path)).await?;
        Ok(response.status())
    }

    async fn delete_product(&self, code: u64) -> Result<StatusCode> {
        let path = format!("/products/{}", code);
        let request = self.client.delete(self.config.url(&path));
        let response = self.send(request, &format!("DELETE {}", path)).await?;
        Ok(response.status())
    }
}

/// Pulls `message` out of an error body.
///
/// Accepts `{"message": "..."}` as well as validation-pipe style
/// `{"message": ["...", "..."]}`.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("message")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_message() {
        let body = r#"{"statusCode": 409, "message": "Produto já existe"}"#;
        assert_eq!(extract_error_message(body).as_deref(), Some("Produto já existe"));
    }

    #[test]
    fn test_extract_message_list() {
        let body = r#"{"message": ["code must be positive", "description should not be empty"]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("code must be positive; description should not be empty")
        );
    }

    #[test]
    fn test_extract_ignores_unstructured_bodies() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("Internal Server Error"), None);
        assert_eq!(extract_error_message(r#"{"error": "x"}"#), None);
        assert_eq!(extract_error_message(r#"{"message": ""}"#), None);
    }
}
