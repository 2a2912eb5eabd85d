mod components;
mod view;

pub use view::{AlertRender, UiContext, draw};
