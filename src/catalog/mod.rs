mod group;
mod image;
mod item;
mod projection;
mod template;

pub use group::{CatalogGroup, GroupMutationError, JewelryType};
pub use image::ItemImage;
pub use item::{CatalogItem, ItemSummary};
pub use projection::{TopItems, TOP_ITEMS_LIMIT};
pub use template::TileTemplate;
