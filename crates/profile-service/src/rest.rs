//! REST implementation of the document-store contract.

use crate::{DocumentStore, DocumentStoreError};
use tracing::{debug, warn};

/// REST client for the document store.
#[derive(Clone)]
pub struct RestDocumentStore {
    http_client: reqwest::Client,
    api_url: String,
    publishable_key: String,
}

impl RestDocumentStore {
    /// Create a new document-store client.
    ///
    /// # Arguments
    /// * `api_url` - The API base URL (e.g. `https://api.medibook.example`)
    /// * `publishable_key` - The public API key sent with every request
    pub fn new(api_url: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: api_url.into(),
            publishable_key: publishable_key.into(),
        }
    }

    /// Build the REST API URL for a collection.
    fn rest_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.api_url, collection)
    }
}

impl DocumentStore for RestDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, DocumentStoreError> {
        let url = format!(
            "{}?id=eq.{}&select=*&limit=1",
            self.rest_url(collection),
            id
        );

        debug!(url = %url, "Fetching document");

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.publishable_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    DocumentStoreError::Network(e.to_string())
                } else {
                    DocumentStoreError::Backend(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Document fetch failed");
            return Err(DocumentStoreError::Backend(format!(
                "HTTP {status}: {body}"
            )));
        }

        let documents: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DocumentStoreError::Backend(format!("invalid response body: {e}")))?;

        Ok(documents.into_iter().next())
    }
}
