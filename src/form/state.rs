use crate::domain::Product;

use super::field::{FieldMap, FieldName};

/// Values and validity flags for every product field.
///
/// `form_is_valid` is derived on construction and is always the conjunction
/// of `input_validities`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    input_values: FieldMap<String>,
    input_validities: FieldMap<bool>,
    form_is_valid: bool,
}

impl FormState {
    /// Blank form for create mode; nothing is valid yet.
    pub fn empty() -> Self {
        Self::from_parts(FieldMap::default(), FieldMap::default())
    }

    /// Seeds the form from the product being edited. Price is never
    /// prefilled, so it starts out invalid.
    pub fn seeded(product: &Product) -> Self {
        let values = FieldMap::from_fn(|field| match field {
            FieldName::Title => product.title.clone(),
            FieldName::ImageUrl => product.image_url.clone(),
            FieldName::Description => product.description.clone(),
            FieldName::Price => String::new(),
        });
        let validities = FieldMap::from_fn(|field| field != FieldName::Price);
        Self::from_parts(values, validities)
    }

    pub fn for_product(product: Option<&Product>) -> Self {
        product.map_or_else(Self::empty, Self::seeded)
    }

    pub(super) fn from_parts(
        input_values: FieldMap<String>,
        input_validities: FieldMap<bool>,
    ) -> Self {
        let form_is_valid = input_validities.values().all(|valid| *valid);
        Self {
            input_values,
            input_validities,
            form_is_valid,
        }
    }

    pub(super) fn into_parts(self) -> (FieldMap<String>, FieldMap<bool>) {
        (self.input_values, self.input_validities)
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.input_values.get(field)
    }

    pub fn is_valid(&self, field: FieldName) -> bool {
        *self.input_validities.get(field)
    }

    pub fn form_is_valid(&self) -> bool {
        self.form_is_valid
    }

    pub fn input_values(&self) -> &FieldMap<String> {
        &self.input_values
    }

    pub fn input_validities(&self) -> &FieldMap<bool> {
        &self.input_validities
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.input_validities
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(field, _)| field)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::empty()
    }
}
