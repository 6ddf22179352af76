//! Client for the `/api/produtos` collection plus the headless form controller
//! that keeps a product table and an edit form in sync with it.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Product, ProductId},
    error::ErrorBody,
    protocol::ProductPayload,
};
use tracing::debug;
use url::Url;

pub mod controller;
pub mod error;
pub mod form;
pub mod view;

pub use controller::{Outcome, ProductFormController, RowAction};
pub use error::{ClientError, Result};
pub use form::{DraftError, FormMode, ProductDraft, ProductForm};
pub use view::{Action, Notice, NoticeKind, ProductRow, ProductView};

pub const DEFAULT_COLLECTION_URL: &str = "http://localhost:3000/api/produtos";

/// The four calls the backend exposes for the product collection.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>>;
    async fn get(&self, id: &ProductId) -> Result<Product>;
    async fn create(&self, payload: &ProductPayload) -> Result<()>;
    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<()>;
    async fn delete(&self, id: &ProductId) -> Result<()>;
}

#[derive(Clone)]
pub struct ProductsClient {
    http: Client,
    collection: Url,
}

impl ProductsClient {
    pub fn new(collection_url: &str) -> Result<Self> {
        Self::with_http_client(Client::new(), collection_url)
    }

    pub fn with_http_client(http: Client, collection_url: &str) -> Result<Self> {
        let trimmed = collection_url.trim().trim_end_matches('/');
        let collection = Url::parse(trimmed).map_err(|err| ClientError::InvalidUrl {
            url: collection_url.to_string(),
            reason: err.to_string(),
        })?;
        if collection.cannot_be_a_base() || !matches!(collection.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: collection_url.to_string(),
                reason: "expected an http(s) url".to_string(),
            });
        }
        Ok(Self { http, collection })
    }

    pub fn collection_url(&self) -> &str {
        self.collection.as_str()
    }

    fn item_url(&self, id: &ProductId) -> Url {
        let mut url = self.collection.clone();
        // Checked to be a base url at construction.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }
}

/// Maps a non-2xx response to [`ClientError::Server`], reading `mensagem`
/// from the body when it is there.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(ClientError::Server {
        status: status.as_u16(),
        message: ErrorBody::reason(status.as_u16(), &body),
    })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl ProductApi for ProductsClient {
    async fn list(&self) -> Result<Vec<Product>> {
        debug!(url = %self.collection, "GET product collection");
        let response = self.http.get(self.collection.clone()).send().await?;
        decode(ensure_success(response).await?).await
    }

    async fn get(&self, id: &ProductId) -> Result<Product> {
        let url = self.item_url(id);
        debug!(%url, "GET product");
        let response = self.http.get(url).send().await?;
        decode(ensure_success(response).await?).await
    }

    async fn create(&self, payload: &ProductPayload) -> Result<()> {
        debug!(url = %self.collection, nome = %payload.nome, "POST product");
        let response = self
            .http
            .post(self.collection.clone())
            .json(payload)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update(&self, id: &ProductId, payload: &ProductPayload) -> Result<()> {
        let url = self.item_url(id);
        debug!(%url, nome = %payload.nome, "PUT product");
        let response = self.http.put(url).json(payload).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        let url = self.item_url(id);
        debug!(%url, "DELETE product");
        let response = self.http.delete(url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
