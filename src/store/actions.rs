use serde::{Deserialize, Serialize};

use crate::domain::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductAction {
    #[serde(rename_all = "camelCase")]
    CreateProduct {
        title: String,
        description: String,
        image_url: String,
        price: String,
    },
    #[serde(rename_all = "camelCase")]
    UpdateProduct {
        id: ProductId,
        title: String,
        description: String,
        image_url: String,
    },
}

pub fn create_product(
    title: impl Into<String>,
    description: impl Into<String>,
    image_url: impl Into<String>,
    price: impl Into<String>,
) -> ProductAction {
    ProductAction::CreateProduct {
        title: title.into(),
        description: description.into(),
        image_url: image_url.into(),
        price: price.into(),
    }
}

pub fn update_product(
    id: ProductId,
    title: impl Into<String>,
    description: impl Into<String>,
    image_url: impl Into<String>,
) -> ProductAction {
    ProductAction::UpdateProduct {
        id,
        title: title.into(),
        description: description.into(),
        image_url: image_url.into(),
    }
}
