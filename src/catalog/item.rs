use super::ItemImage;
use std::fmt;

/// Descriptive fields shared by items and groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSummary {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: ItemImage,
}

impl ItemSummary {
    pub fn new(
        unique_id: &str,
        title: &str,
        subtitle: &str,
        image_path: &str,
        description: &str,
    ) -> Self {
        ItemSummary {
            unique_id: unique_id.to_owned(),
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            description: description.to_owned(),
            image: ItemImage::new(image_path),
        }
    }
}

/// A sellable catalog entry. Read-only once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    summary: ItemSummary,
    content: String,
    col_span: u32,
    row_span: u32,
    group_id: String,
}

impl CatalogItem {
    pub fn new(
        summary: ItemSummary,
        content: &str,
        col_span: u32,
        row_span: u32,
        group_id: &str,
    ) -> Self {
        CatalogItem {
            summary,
            content: content.to_owned(),
            col_span,
            row_span,
            group_id: group_id.to_owned(),
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

    pub fn image(&self) -> &ItemImage {
        &self.summary.image
    }

    pub fn summary(&self) -> &ItemSummary {
        &self.summary
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn col_span(&self) -> u32 {
        self.col_span
    }

    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    /// Id of the group this item was loaded into. Association only, the
    /// group owns the item.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
