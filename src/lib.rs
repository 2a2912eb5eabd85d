#![deny(rust_2018_idioms)]

mod app;
pub mod domain;
pub mod form;
mod presentation;
pub mod screen;
pub mod store;

pub use app::{EditorResult, ProductEditor, ScreenExit, UiOptions};
pub use domain::{Platform, Product, ProductId};
pub use store::{MemoryStore, ProductAction, StoreError};

pub mod prelude {
    pub use super::{
        EditorResult, MemoryStore, Platform, Product, ProductEditor, ProductId, ScreenExit,
        UiOptions,
    };
}

/// Draws one frame of the product screen without a live terminal.
pub fn render_screen(
    frame: &mut ratatui::Frame<'_>,
    screen: &screen::EditProductScreen,
    header: &screen::HeaderOptions,
) {
    presentation::draw(
        frame,
        presentation::UiContext {
            header,
            screen,
            status_message: "",
            dirty: screen.is_dirty(),
            error_count: screen.form_state().invalid_fields().count(),
            help: None,
            alert: None,
        },
    );
}
