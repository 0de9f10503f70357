use super::{CatalogItem, ItemSummary, TopItems};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JewelryType {
    Necklace,
    Ring,
}

impl JewelryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JewelryType::Necklace => "Necklace",
            JewelryType::Ring => "Ring",
        }
    }

    /// Exact, case-sensitive match on the variant name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Necklace" => Some(JewelryType::Necklace),
            "Ring" => Some(JewelryType::Ring),
            _ => None,
        }
    }
}

impl fmt::Display for JewelryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupMutationError {
    #[error("Position {position} is out of range for a group of {len} items")]
    IndexOutOfRange { position: usize, len: usize },
}

/// A named category of items sharing a jewelry type.
///
/// The group owns its items in display order and keeps a capped projection
/// of them for summary views. All mutations go through the methods below so
/// that the projection is updated together with the item sequence.
#[derive(Clone, Debug)]
pub struct CatalogGroup {
    summary: ItemSummary,
    jewelry_type: JewelryType,
    items: Vec<Arc<CatalogItem>>,
    top_items: TopItems<Arc<CatalogItem>>,
}

impl CatalogGroup {
    pub fn new(summary: ItemSummary, jewelry_type: JewelryType) -> Self {
        CatalogGroup {
            summary,
            jewelry_type,
            items: Vec::new(),
            top_items: TopItems::new(),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.summary.unique_id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    pub fn subtitle(&self) -> &str {
        &self.summary.subtitle
    }

    pub fn description(&self) -> &str {
        &self.summary.description
    }

    pub fn summary(&self) -> &ItemSummary {
        &self.summary
    }

    pub fn jewelry_type(&self) -> JewelryType {
        self.jewelry_type
    }

    pub fn items(&self) -> &[Arc<CatalogItem>] {
        &self.items
    }

    pub fn top_items(&self) -> &[Arc<CatalogItem>] {
        self.top_items.as_slice()
    }

    fn check_position(&self, position: usize, len: usize) -> Result<(), GroupMutationError> {
        if position < len {
            Ok(())
        } else {
            Err(GroupMutationError::IndexOutOfRange {
                position,
                len: self.items.len(),
            })
        }
    }

    pub fn push_item(&mut self, item: Arc<CatalogItem>) {
        let position = self.items.len();
        self.items.push(item);
        self.top_items.on_insert(position, &self.items);
    }

    pub fn insert_item(
        &mut self,
        position: usize,
        item: Arc<CatalogItem>,
    ) -> Result<(), GroupMutationError> {
        self.check_position(position, self.items.len() + 1)?;
        self.items.insert(position, item);
        self.top_items.on_insert(position, &self.items);
        Ok(())
    }

    pub fn move_item(
        &mut self,
        old_position: usize,
        new_position: usize,
    ) -> Result<(), GroupMutationError> {
        self.check_position(old_position, self.items.len())?;
        self.check_position(new_position, self.items.len())?;
        let item = self.items.remove(old_position);
        self.items.insert(new_position, item);
        self.top_items
            .on_move(old_position, new_position, &self.items);
        Ok(())
    }

    pub fn remove_item(&mut self, position: usize) -> Result<Arc<CatalogItem>, GroupMutationError> {
        self.check_position(position, self.items.len())?;
        let removed = self.items.remove(position);
        self.top_items.on_remove(position, &self.items);
        Ok(removed)
    }

    /// Replaces the item at `position`, returning the previous one.
    pub fn replace_item(
        &mut self,
        position: usize,
        item: Arc<CatalogItem>,
    ) -> Result<Arc<CatalogItem>, GroupMutationError> {
        self.check_position(position, self.items.len())?;
        let previous = std::mem::replace(&mut self.items[position], item);
        self.top_items.on_replace(position, &self.items);
        Ok(previous)
    }

    pub fn reset_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Arc<CatalogItem>>,
    {
        self.items = items.into_iter().collect();
        self.top_items.on_reset(&self.items);
    }
}

impl fmt::Display for CatalogGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
