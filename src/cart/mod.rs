mod models;
mod store;

pub use models::CartLine;
pub use store::{CartError, CartStore};
