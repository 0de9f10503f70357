//! Tile template selection for grid views.
//!
//! Items encode their tile shape in the prefix of their unique id, e.g.
//! `NecklacesBig-3` or `EarringsSmallP-1`.

use super::CatalogItem;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileTemplate {
    NecklacesBig,
    NecklacesSmall,
    RingsBig,
    RingsSmall,
    BraceletsBig,
    BraceletsSmall,
    EarringsBig,
    EarringsSmallP,
    EarringsSmallL,
    Default,
}

/// Checked in order, first match wins.
const PREFIXED_TEMPLATES: [TileTemplate; 9] = [
    TileTemplate::NecklacesBig,
    TileTemplate::NecklacesSmall,
    TileTemplate::RingsBig,
    TileTemplate::RingsSmall,
    TileTemplate::BraceletsBig,
    TileTemplate::BraceletsSmall,
    TileTemplate::EarringsBig,
    TileTemplate::EarringsSmallP,
    TileTemplate::EarringsSmallL,
];

impl TileTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileTemplate::NecklacesBig => "NecklacesBig",
            TileTemplate::NecklacesSmall => "NecklacesSmall",
            TileTemplate::RingsBig => "RingsBig",
            TileTemplate::RingsSmall => "RingsSmall",
            TileTemplate::BraceletsBig => "BraceletsBig",
            TileTemplate::BraceletsSmall => "BraceletsSmall",
            TileTemplate::EarringsBig => "EarringsBig",
            TileTemplate::EarringsSmallP => "EarringsSmallP",
            TileTemplate::EarringsSmallL => "EarringsSmallL",
            TileTemplate::Default => "Default",
        }
    }

    pub fn for_item_id(unique_id: &str) -> TileTemplate {
        PREFIXED_TEMPLATES
            .iter()
            .copied()
            .find(|template| unique_id.starts_with(template.as_str()))
            .unwrap_or(TileTemplate::Default)
    }

    pub fn for_item(item: &CatalogItem) -> TileTemplate {
        Self::for_item_id(item.unique_id())
    }
}

impl fmt::Display for TileTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
