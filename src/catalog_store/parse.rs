//! Catalog document parsing.
//!
//! The document is a JSON object with a `Groups` list. Field names are
//! PascalCase and every field is required; spans are integers encoded as
//! strings.

use super::validation::{find_duplicate_ids, parse_span, validate_unique_id};
use super::CatalogError;
use crate::catalog::{CatalogGroup, CatalogItem, ItemSummary, JewelryType};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "Groups")]
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GroupRecord {
    unique_id: String,
    #[serde(rename = "Type")]
    jewelry_type: String,
    title: String,
    subtitle: String,
    image_path: String,
    description: String,
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ItemRecord {
    unique_id: String,
    title: String,
    subtitle: String,
    image_path: String,
    description: String,
    content: String,
    col_span: String,
    row_span: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Fail on duplicate group or item ids instead of only logging them.
    pub strict_unique_ids: bool,
}

fn build_item(record: ItemRecord, group_id: &str) -> Result<CatalogItem, CatalogError> {
    validate_unique_id("Item", &record.unique_id)?;
    let col_span = parse_span("ColSpan", &record.unique_id, &record.col_span)?;
    let row_span = parse_span("RowSpan", &record.unique_id, &record.row_span)?;
    let summary = ItemSummary::new(
        &record.unique_id,
        &record.title,
        &record.subtitle,
        &record.image_path,
        &record.description,
    );
    Ok(CatalogItem::new(
        summary,
        &record.content,
        col_span,
        row_span,
        group_id,
    ))
}

fn build_group(record: GroupRecord) -> Result<CatalogGroup, CatalogError> {
    validate_unique_id("Group", &record.unique_id)?;
    let jewelry_type = JewelryType::from_str(&record.jewelry_type).ok_or_else(|| {
        CatalogError::MalformedCatalog(format!(
            "Group {} has unknown Type {:?}",
            record.unique_id, record.jewelry_type
        ))
    })?;
    let summary = ItemSummary::new(
        &record.unique_id,
        &record.title,
        &record.subtitle,
        &record.image_path,
        &record.description,
    );
    let mut group = CatalogGroup::new(summary, jewelry_type);
    for item_record in record.items {
        let item = build_item(item_record, &record.unique_id)?;
        group.push_item(Arc::new(item));
    }
    Ok(group)
}

/// Parses a whole catalog document. Nothing is returned unless every group
/// and item is valid.
pub fn parse_catalog(text: &str, options: ParseOptions) -> Result<Vec<CatalogGroup>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(text)
        .map_err(|err| CatalogError::MalformedCatalog(err.to_string()))?;

    let groups = document
        .groups
        .into_iter()
        .map(build_group)
        .collect::<Result<Vec<_>, _>>()?;

    let duplicates = find_duplicate_ids(&groups);
    if let Some(first) = duplicates.first() {
        if options.strict_unique_ids {
            return Err(CatalogError::MalformedCatalog(format!(
                "{} id {} appears {} times",
                first.kind, first.unique_id, first.occurrences
            )));
        }
        for duplicate in duplicates.iter() {
            warn!(
                "{} id {} appears {} times, lookups for it will find nothing",
                duplicate.kind, duplicate.unique_id, duplicate.occurrences
            );
        }
    }

    Ok(groups)
}
