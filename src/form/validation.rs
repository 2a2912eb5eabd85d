use super::{actions::FormCommand, field::FieldName};

pub fn is_valid_text(field: FieldName, text: &str) -> bool {
    field.rule().is_satisfied_by(text)
}

/// Builds the update event for a text change, judging validity with the
/// field's rule at the time of the change.
pub fn text_change(field: FieldName, text: impl Into<String>) -> FormCommand {
    let value = text.into();
    let is_valid = is_valid_text(field, &value);
    FormCommand::InputUpdate {
        field,
        value,
        is_valid,
    }
}
