use indexmap::IndexMap;

use crate::domain::{Product, ProductId};

use super::{ProductAction, ProductDispatch, ProductLookup, StoreError};

/// In-memory product collection acting for the current user.
#[derive(Debug)]
pub struct MemoryStore {
    owner_id: String,
    products: IndexMap<ProductId, Product>,
    next_id: u64,
    last_rejection: Option<StoreError>,
}

impl MemoryStore {
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            products: IndexMap::new(),
            next_id: 1,
            last_rejection: None,
        }
    }

    pub fn with_products(
        owner_id: impl Into<String>,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new(owner_id);
        for product in products {
            if store.products.contains_key(&product.id) {
                return Err(StoreError::DuplicateId(product.id));
            }
            store.products.insert(product.id.clone(), product);
        }
        Ok(store)
    }

    /// Loads a catalog written as a JSON array of products.
    pub fn from_json(owner_id: impl Into<String>, raw: &str) -> Result<Self, StoreError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::with_products(owner_id, products)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, StoreError> {
        let products: Vec<&Product> = self.products.values().collect();
        let payload = if pretty {
            serde_json::to_string_pretty(&products)?
        } else {
            serde_json::to_string(&products)?
        };
        Ok(payload)
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn user_products(&self) -> impl Iterator<Item = &Product> {
        self.products
            .values()
            .filter(|product| product.owner_id == self.owner_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Why the most recent dispatched action was not applied, if it was not.
    pub fn last_rejection(&self) -> Option<&StoreError> {
        self.last_rejection.as_ref()
    }

    pub fn apply(&mut self, action: ProductAction) -> Result<ProductId, StoreError> {
        match action {
            ProductAction::CreateProduct {
                title,
                description,
                image_url,
                price,
            } => {
                let price = parse_price(&price)?;
                let id = self.allocate_id();
                let product = Product {
                    id: id.clone(),
                    owner_id: self.owner_id.clone(),
                    title,
                    image_url,
                    description,
                    price,
                };
                self.products.insert(id.clone(), product);
                Ok(id)
            }
            ProductAction::UpdateProduct {
                id,
                title,
                description,
                image_url,
            } => {
                let Some(product) = self
                    .products
                    .get_mut(&id)
                    .filter(|product| product.owner_id == self.owner_id)
                else {
                    return Err(StoreError::UnknownProduct(id));
                };
                product.title = title;
                product.description = description;
                product.image_url = image_url;
                Ok(id)
            }
        }
    }

    fn allocate_id(&mut self) -> ProductId {
        loop {
            let candidate = ProductId::new(format!("p{}", self.next_id));
            self.next_id += 1;
            if !self.products.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

fn parse_price(raw: &str) -> Result<f64, StoreError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| StoreError::InvalidPrice(raw.to_string()))
}

impl ProductLookup for MemoryStore {
    fn find_user_product(&self, id: &ProductId) -> Option<Product> {
        self.user_products().find(|product| &product.id == id).cloned()
    }
}

impl ProductDispatch for MemoryStore {
    fn dispatch(&mut self, action: ProductAction) {
        match self.apply(action) {
            Ok(id) => {
                tracing::info!(%id, "product stored");
                self.last_rejection = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "product action rejected by store");
                self.last_rejection = Some(err);
            }
        }
    }
}
