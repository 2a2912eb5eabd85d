use anyhow::Result;

use crate::{
    domain::ProductId,
    screen::{EDIT_PRODUCT_ROUTE, Navigator, PRODUCT_ID_PARAM, Route, StackNavigator},
    store::{ProductAction, ProductStore},
};

use super::{options::UiOptions, runtime::App};

/// How the product screen was left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenExit {
    Saved(ProductAction),
    Abandoned,
}

#[derive(Debug)]
pub struct EditorResult<S> {
    pub store: S,
    pub exit: ScreenExit,
}

/// Opens the add/edit product screen in the terminal over a product store.
#[derive(Debug)]
pub struct ProductEditor<S> {
    store: S,
    product_id: Option<ProductId>,
    options: UiOptions,
}

impl<S: ProductStore> ProductEditor<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            product_id: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_product_id(mut self, id: impl Into<ProductId>) -> Self {
        self.product_id = Some(id.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<EditorResult<S>> {
        let ProductEditor {
            store,
            product_id,
            options,
        } = self;

        let mut navigator = StackNavigator::new();
        navigator.navigate(Route::new(EDIT_PRODUCT_ROUTE));
        if let Some(id) = product_id {
            navigator.set_param(PRODUCT_ID_PARAM, id.to_string());
        }

        App::new(store, navigator, options).run()
    }
}
