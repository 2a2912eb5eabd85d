mod actions;
mod error;
mod memory;

pub use actions::{ProductAction, create_product, update_product};
pub use error::StoreError;
pub use memory::MemoryStore;

use crate::domain::{Product, ProductId};

/// Read side of the product store.
pub trait ProductLookup {
    /// Finds a product among the current user's products.
    fn find_user_product(&self, id: &ProductId) -> Option<Product>;
}

/// Write side of the product store. Dispatch is fire-and-forget: the caller
/// never learns whether the store accepted the action.
pub trait ProductDispatch {
    fn dispatch(&mut self, action: ProductAction);
}

pub trait ProductStore: ProductLookup + ProductDispatch {}

impl<T: ProductLookup + ProductDispatch> ProductStore for T {}
