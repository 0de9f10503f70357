//! Catalog documents for tests.

use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn item_record(unique_id: &str) -> Value {
    json!({
        "UniqueId": unique_id,
        "Title": format!("Title {}", unique_id),
        "Subtitle": "Subtitle",
        "ImagePath": format!("Assets/{}.png", unique_id),
        "Description": "Description",
        "Content": "Content",
        "ColSpan": "1",
        "RowSpan": "1"
    })
}

pub fn group_record(unique_id: &str, jewelry_type: &str, items: Vec<Value>) -> Value {
    json!({
        "UniqueId": unique_id,
        "Type": jewelry_type,
        "Title": format!("Group {}", unique_id),
        "Subtitle": "",
        "ImagePath": "",
        "Description": "",
        "Items": items
    })
}

pub fn catalog_document(groups: Vec<Value>) -> String {
    json!({ "Groups": groups }).to_string()
}

/// G1 (Necklace) with items N0..N14 and G2 (Ring) with items R0, R1.
pub fn two_group_catalog() -> String {
    let necklaces = (0..15).map(|i| item_record(&format!("N{}", i))).collect();
    let rings = (0..2).map(|i| item_record(&format!("R{}", i))).collect();
    catalog_document(vec![
        group_record("G1", "Necklace", necklaces),
        group_record("G2", "Ring", rings),
    ])
}

/// Same as `two_group_catalog` but with `ColSpan` missing from one item.
pub fn catalog_missing_col_span() -> String {
    let mut broken = item_record("R1");
    broken
        .as_object_mut()
        .expect("item record is an object")
        .remove("ColSpan");
    catalog_document(vec![group_record(
        "G2",
        "Ring",
        vec![item_record("R0"), broken],
    )])
}

/// Writes `text` to a catalog file in a fresh temporary directory.
/// Returns (temp_dir, catalog_path)
pub fn write_catalog(text: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("catalog.json");
    fs::write(&path, text)?;
    Ok((dir, path))
}
