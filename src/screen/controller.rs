use crate::{
    domain::ProductId,
    form::{FieldName, FormState},
    store::{ProductAction, ProductDispatch, create_product, update_product},
};

use super::navigation::Navigator;

pub const INVALID_FORM_TITLE: &str = "Wrong input!";
pub const INVALID_FORM_MESSAGE: &str = "Please check the errors in the form";
pub const ALERT_ACKNOWLEDGE: &str = "Okay";

/// A blocking notice with a single acknowledgment button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub button: String,
}

impl Alert {
    pub fn invalid_form() -> Self {
        Self {
            title: INVALID_FORM_TITLE.to_string(),
            message: INVALID_FORM_MESSAGE.to_string(),
            button: ALERT_ACKNOWLEDGE.to_string(),
        }
    }
}

/// The form failed validation at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub invalid_fields: Vec<FieldName>,
}

impl ValidationFailure {
    pub fn alert(&self) -> Alert {
        Alert::invalid_form()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(ProductAction),
    Rejected(ValidationFailure),
}

/// Submit handler derived from one snapshot of the screen: the form state and
/// the id of the product under edit, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitController {
    editing: Option<ProductId>,
    form_state: FormState,
}

impl SubmitController {
    pub fn new(editing: Option<ProductId>, form_state: FormState) -> Self {
        Self {
            editing,
            form_state,
        }
    }

    pub fn editing(&self) -> Option<&ProductId> {
        self.editing.as_ref()
    }

    pub fn form_state(&self) -> &FormState {
        &self.form_state
    }

    pub fn submit(
        &self,
        store: &mut dyn ProductDispatch,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        let form = &self.form_state;
        if !form.form_is_valid() {
            let failure = ValidationFailure {
                invalid_fields: form.invalid_fields().collect(),
            };
            tracing::info!(invalid = ?failure.invalid_fields, "submit blocked by invalid form");
            return SubmitOutcome::Rejected(failure);
        }

        let action = match &self.editing {
            Some(id) => update_product(
                id.clone(),
                form.value(FieldName::Title),
                form.value(FieldName::Description),
                form.value(FieldName::ImageUrl),
            ),
            None => create_product(
                form.value(FieldName::Title),
                form.value(FieldName::Description),
                form.value(FieldName::ImageUrl),
                form.value(FieldName::Price),
            ),
        };
        tracing::debug!(?action, "dispatching product action");
        store.dispatch(action.clone());
        navigator.go_back();
        SubmitOutcome::Submitted(action)
    }
}
