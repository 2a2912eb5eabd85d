mod actions;
mod field;
mod input;
mod reducers;
mod state;
mod validation;

pub use actions::FormCommand;
pub use field::{FieldMap, FieldName, FieldRule, KeyboardKind};
pub use input::handle_text_edit;
pub use reducers::reduce;
pub use state::FormState;
pub use validation::{is_valid_text, text_change};
