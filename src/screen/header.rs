use crate::domain::Platform;

use super::navigation::{Navigator, PRODUCT_ID_PARAM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem {
    pub title: &'static str,
    pub icon_name: &'static str,
}

/// What the navigation header shows above the product screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    pub title: &'static str,
    pub save: HeaderItem,
}

impl HeaderOptions {
    pub fn for_route(navigator: &dyn Navigator, platform: Platform) -> Self {
        let title = if navigator.param(PRODUCT_ID_PARAM).is_some() {
            "Edit Product"
        } else {
            "Add Product"
        };
        Self {
            title,
            save: HeaderItem {
                title: "Save",
                icon_name: platform.checkmark_icon(),
            },
        }
    }
}
