//! CollectionEntity trait implementation for the Product domain type.
//!
//! This module contains the [`CollectionEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`crate::framework::CollectionStore`].
//!
//! Ids start at 1 and follow "max + 1". Numeric coercion happens in two places with the same
//! rules: when a draft becomes a product, and when a snapshot element is loaded.

use crate::framework::CollectionEntity;
use crate::model::{Product, ProductDraft, ProductId, StoredProduct, MAX_PRODUCT_ID};
use crate::product_store::SnapshotError;

impl CollectionEntity for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Stored = StoredProduct;
    type RejectError = SnapshotError;

    fn id(&self) -> ProductId {
        self.id
    }

    fn first_id() -> ProductId {
        ProductId(1)
    }

    /// Stays within [`MAX_PRODUCT_ID`], the same bound `from_stored` checks.
    fn next_id(max: ProductId) -> Option<ProductId> {
        max.0
            .checked_add(1)
            .filter(|&next| next <= MAX_PRODUCT_ID)
            .map(ProductId)
    }

    fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self::new(
            id,
            draft.name,
            draft.category,
            draft.price.to_number(),
            draft.quantity.to_number(),
        )
    }

    fn from_stored(stored: StoredProduct) -> Result<Self, SnapshotError> {
        if stored.id == 0 || stored.id > MAX_PRODUCT_ID {
            return Err(SnapshotError::IdOutOfRange(stored.id));
        }
        Ok(Self::new(
            ProductId(stored.id),
            stored.name.unwrap_or_default(),
            stored.category.unwrap_or_default(),
            crate::model::coerce_number(&stored.price),
            crate::model::coerce_number(&stored.quantity),
        ))
    }
}
