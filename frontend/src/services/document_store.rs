use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use serde::Deserialize;
use shared::contact::ContactSubmission;
use shared::persistence::{DocumentHandle, DocumentStore, StoreError};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Writes records through the backend's collection endpoint.
pub struct HttpDocumentStore {
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn documents_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{}/documents", self.base_url, collection)
    }
}

impl DocumentStore for HttpDocumentStore {
    fn create_record(
        &self,
        collection: &str,
        record: &ContactSubmission,
    ) -> LocalBoxFuture<'static, Result<DocumentHandle, StoreError>> {
        let url = self.documents_url(collection);
        let body = serde_json::to_string(record);

        async move {
            let body = body.map_err(|e| StoreError::Malformed(e.to_string()))?;
            let response = Request::post(&url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| StoreError::Network(format!("{:?}", e)))?
                .send()
                .await
                .map_err(|e| StoreError::Network(format!("{:?}", e)))?;

            if !response.ok() {
                let status = response.status();
                let message = match response.json::<ErrorBody>().await {
                    Ok(body) => body.error,
                    Err(_) => response.status_text(),
                };
                return Err(StoreError::Rejected { status, message });
            }

            response
                .json::<DocumentHandle>()
                .await
                .map_err(|e| StoreError::Malformed(format!("{:?}", e)))
        }
        .boxed_local()
    }
}
