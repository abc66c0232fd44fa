//! # Product Client
//!
//! Provides a high‑level API for interacting with the product store actor.
//! It wraps a `StoreClient<Product>` and exposes domain‑specific methods.
use crate::framework::{CollectionClient, FrameworkError, StoreClient};
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_store::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the product store actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CollectionClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}

impl ProductClient {
    /// Adds a product and returns the id the store assigned to it.
    ///
    /// Fails with [`ProductError::IdsExhausted`] when the store refused the draft.
    #[instrument(skip(self))]
    pub async fn add_product(&self, draft: ProductDraft) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner
            .add(draft)
            .await
            .map_err(Self::map_error)?
            .ok_or(ProductError::IdsExhausted)
    }

    /// Replaces the stored product with the same id.
    ///
    /// `Ok(false)` means no product had that id and nothing changed.
    #[instrument(skip(self), fields(id = %product.id))]
    pub async fn update_product(&self, product: Product) -> Result<bool, ProductError> {
        debug!("Sending request");
        self.inner.update(product).await.map_err(Self::map_error)
    }

    /// Like [`get`](CollectionClient::get), but a missing product is an error.
    ///
    /// Detail and edit views use this to decide between rendering and "not found".
    #[instrument(skip(self))]
    pub async fn require(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }
}
