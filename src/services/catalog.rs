use crate::models::Tutor;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the marketplace API
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Marketplace API client
///
/// Fetches the approved tutor catalog that the search pipeline runs over.
/// The marketplace is the system of record; this service never writes back.
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Fetch the full approved-tutor collection
    ///
    /// Accepts both response envelopes the marketplace has shipped over
    /// time: `{"tutors": [...]}` and a bare array. Individual documents
    /// that fail to deserialize are skipped with a warning so one
    /// malformed record never takes the whole catalog down.
    pub async fn list_tutors(&self) -> Result<Vec<Tutor>, CatalogError> {
        let url = format!(
            "{}/api/v1/tutors",
            self.base_url.trim_end_matches('/')
        );

        tracing::debug!("Fetching tutor catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("status", "approved")])
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Catalog fetch failed: {} - {}", status, body);
            return Err(CatalogError::Api { status, body });
        }

        let json: Value = response.json().await?;

        let documents = match &json {
            Value::Array(items) => items.as_slice(),
            Value::Object(_) => json
                .get("tutors")
                .and_then(|t| t.as_array())
                .map(|items| items.as_slice())
                .ok_or_else(|| CatalogError::InvalidResponse("Missing tutors array".into()))?,
            _ => {
                return Err(CatalogError::InvalidResponse(
                    "Expected object or array".into(),
                ))
            }
        };

        let mut skipped = 0usize;
        let tutors: Vec<Tutor> = documents
            .iter()
            .filter_map(|doc| match serde_json::from_value::<Tutor>(doc.clone()) {
                Ok(tutor) => Some(tutor),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping malformed tutor document: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} tutors ({} skipped)", tutors.len(), skipped);

        Ok(tutors)
    }

    /// Probe the marketplace health endpoint
    pub async fn health_check(&self) -> Result<bool, CatalogError> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new(
            "https://api.dars.test".to_string(),
            "test_key".to_string(),
            30,
        )
        .unwrap();

        assert_eq!(client.base_url, "https://api.dars.test");
        assert_eq!(client.api_key, "test_key");
    }
}
