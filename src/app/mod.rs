pub(crate) mod input;
mod options;
mod popup;
mod product_editor;
mod runtime;
mod status;
mod terminal;

pub use options::UiOptions;
pub use product_editor::{EditorResult, ProductEditor, ScreenExit};
