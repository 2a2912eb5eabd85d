mod controller;
mod edit_product;
mod header;
mod navigation;
mod save_slot;

pub use controller::{Alert, SubmitController, SubmitOutcome, ValidationFailure};
pub use edit_product::{EditMode, EditProductScreen};
pub use header::{HeaderItem, HeaderOptions};
pub use navigation::{EDIT_PRODUCT_ROUTE, Navigator, PRODUCT_ID_PARAM, Route, StackNavigator};
pub use save_slot::SaveSlot;
