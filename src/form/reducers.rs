use super::{actions::FormCommand, state::FormState};

/// Pure transition for the product form.
///
/// Only `InputUpdate` touches the form; focus commands belong to the screen
/// and leave the state as it was.
pub fn reduce(state: &FormState, command: &FormCommand) -> FormState {
    match command {
        FormCommand::InputUpdate {
            field,
            value,
            is_valid,
        } => {
            let (mut values, mut validities) = state.clone().into_parts();
            values.set(*field, value.clone());
            validities.set(*field, *is_valid);
            let next = FormState::from_parts(values, validities);
            tracing::trace!(
                field = field.key(),
                is_valid,
                form_is_valid = next.form_is_valid(),
                "form input updated"
            );
            next
        }
        FormCommand::FocusNextField | FormCommand::FocusPrevField => state.clone(),
    }
}
