use serde::{Deserialize, Serialize};

/// One row of the shopping cart.
///
/// `item_id` refers to a catalog item but is not checked against the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub title: String,
    pub quantity: u32,
    pub price: f64,
}

impl CartLine {
    pub fn new(item_id: &str, title: &str, quantity: u32, price: f64) -> Self {
        CartLine {
            item_id: item_id.to_owned(),
            title: title.to_owned(),
            quantity,
            price,
        }
    }
}
