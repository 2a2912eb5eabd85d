use crossterm::event::KeyEvent;

use crate::{
    domain::{Product, ProductId},
    form::{FieldMap, FieldName, FormCommand, FormState, handle_text_edit, reduce, text_change},
    store::ProductLookup,
};

use super::{
    controller::SubmitController,
    navigation::{Navigator, PRODUCT_ID_PARAM},
    save_slot::SaveSlot,
};

const FIELD_ORDER: [FieldName; FieldName::COUNT] = [
    FieldName::Title,
    FieldName::ImageUrl,
    FieldName::Price,
    FieldName::Description,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit,
}

/// The add/edit product screen: form state, focus, and the save handler it
/// publishes for the header.
#[derive(Debug)]
pub struct EditProductScreen {
    product_id: Option<ProductId>,
    edited_product: Option<Product>,
    form_state: FormState,
    touched: FieldMap<bool>,
    focus: usize,
    save_slot: SaveSlot,
    bound: Option<SubmitController>,
}

impl EditProductScreen {
    /// Reads the `productId` route parameter and looks the product up among
    /// the user's products. A missing product means create mode.
    pub fn mount(navigator: &dyn Navigator, products: &dyn ProductLookup) -> Self {
        let product_id = navigator.param(PRODUCT_ID_PARAM).map(ProductId::from);
        let edited_product = product_id
            .as_ref()
            .and_then(|id| products.find_user_product(id));
        if let (Some(id), None) = (&product_id, &edited_product) {
            tracing::warn!(%id, "product not found, opening in create mode");
        }
        let form_state = FormState::for_product(edited_product.as_ref());
        let mut screen = Self {
            product_id,
            edited_product,
            form_state,
            touched: FieldMap::default(),
            focus: 0,
            save_slot: SaveSlot::new(),
            bound: None,
        };
        screen.sync_save_slot();
        screen
    }

    pub fn mode(&self) -> EditMode {
        if self.edited_product.is_some() {
            EditMode::Edit
        } else {
            EditMode::Create
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn edited_product(&self) -> Option<&Product> {
        self.edited_product.as_ref()
    }

    pub fn form_state(&self) -> &FormState {
        &self.form_state
    }

    pub fn fields(&self) -> &'static [FieldName] {
        &FIELD_ORDER
    }

    pub fn focused_field(&self) -> FieldName {
        FIELD_ORDER[self.focus]
    }

    pub fn focus(&mut self, field: FieldName) {
        if let Some(index) = FIELD_ORDER.iter().position(|candidate| *candidate == field) {
            self.focus = index;
        }
    }

    /// The slot the header's Save item should invoke.
    pub fn save_slot(&self) -> SaveSlot {
        self.save_slot.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.touched.values().any(|touched| *touched)
    }

    /// Hint to show under a field the user has edited into an invalid state.
    pub fn error_hint(&self, field: FieldName) -> Option<&'static str> {
        (*self.touched.get(field) && !self.form_state.is_valid(field))
            .then(|| field.error_hint())
    }

    pub fn apply(&mut self, command: FormCommand) {
        match &command {
            FormCommand::FocusNextField => self.focus = (self.focus + 1) % FIELD_ORDER.len(),
            FormCommand::FocusPrevField => {
                self.focus = (self.focus + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()
            }
            FormCommand::InputUpdate { field, .. } => {
                self.touched.set(*field, true);
            }
        }
        self.form_state = reduce(&self.form_state, &command);
        self.sync_save_slot();
    }

    /// Single entry point for every text input on the screen.
    pub fn text_changed(&mut self, field: FieldName, text: impl Into<String>) {
        self.apply(text_change(field, text));
    }

    /// Edits the focused input. Returns whether the text changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let field = self.focused_field();
        let mut buffer = self.form_state.value(field).to_string();
        if !handle_text_edit(&mut buffer, field.keyboard(), key) {
            return false;
        }
        self.text_changed(field, buffer);
        true
    }

    /// Rebinds the save slot when the controller's inputs changed since the
    /// last bind.
    fn sync_save_slot(&mut self) {
        let controller = SubmitController::new(
            self.edited_product.as_ref().map(|product| product.id.clone()),
            self.form_state.clone(),
        );
        if self.bound.as_ref() == Some(&controller) {
            return;
        }
        self.save_slot.bind(controller.clone());
        self.bound = Some(controller);
    }
}
