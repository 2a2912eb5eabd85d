use super::field::FieldName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    FocusNextField,
    FocusPrevField,
    /// A field's text changed. `is_valid` is computed by the sender; the
    /// reducer records it as given.
    InputUpdate {
        field: FieldName,
        value: String,
        is_valid: bool,
    },
}
