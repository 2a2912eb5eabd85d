use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to parse product catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),

    #[error("price {0:?} is not a number")]
    InvalidPrice(String),

    #[error("no product with id {0} owned by the current user")]
    UnknownProduct(ProductId),
}
