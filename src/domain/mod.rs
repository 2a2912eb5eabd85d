mod platform;
mod product;

pub use platform::Platform;
pub use product::{Product, ProductId};
