//! End-to-end tests for loading and querying the catalog.

mod common;

use common::*;
use jewelry_catalog::catalog::{JewelryType, TileTemplate, TOP_ITEMS_LIMIT};
use jewelry_catalog::catalog_store::{
    CatalogError, CatalogStore, FileCatalogSource, ParseOptions, StaticCatalogSource,
};
use std::fs;
use std::path::PathBuf;

fn ids<'a, I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a T>,
    T: AsRef<jewelry_catalog::CatalogItem> + 'a,
{
    items
        .into_iter()
        .map(|i| i.as_ref().unique_id().to_owned())
        .collect()
}

fn expected_ids(prefix: &str, range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("{}{}", prefix, i)).collect()
}

#[tokio::test]
async fn test_two_group_round_trip() {
    let (_dir, path) = write_catalog(&two_group_catalog()).unwrap();
    let store = CatalogStore::new(Box::new(FileCatalogSource::new(&path)));

    let groups = store.get_all_groups().await.unwrap();
    let group_ids: Vec<&str> = groups.iter().map(|g| g.unique_id()).collect();
    assert_eq!(group_ids, vec!["G1", "G2"]);

    let g1 = &groups[0];
    assert_eq!(g1.items().len(), 15);
    assert_eq!(g1.top_items().len(), TOP_ITEMS_LIMIT);
    assert_eq!(ids(g1.top_items()), expected_ids("N", 0..12));

    // The cached catalog is shared; mutate a copy of the group.
    let mut g1 = g1.clone();
    g1.remove_item(0).unwrap();
    assert_eq!(ids(g1.top_items()), expected_ids("N", 1..13));
}

#[tokio::test]
async fn test_lookups_on_loaded_catalog() {
    let store = CatalogStore::new(Box::new(StaticCatalogSource::new(
        "two groups",
        &two_group_catalog(),
    )));

    let item = store.get_item("N14").await.unwrap().unwrap();
    assert_eq!(item.title(), "Title N14");
    assert_eq!(item.group_id(), "G1");
    assert!(store.get_item("N15").await.unwrap().is_none());

    assert_eq!(
        store.get_group("G2").await.unwrap().unwrap().jewelry_type(),
        JewelryType::Ring
    );
    assert!(store.get_group("G3").await.unwrap().is_none());

    let rings = store
        .get_groups_by_type(JewelryType::Ring)
        .await
        .unwrap()
        .unwrap();
    let ring_ids: Vec<&str> = rings.iter().map(|g| g.unique_id()).collect();
    assert_eq!(ring_ids, vec!["G2"]);
}

#[tokio::test]
async fn test_type_filter_keeps_load_order_and_reports_none() {
    let text = catalog_document(vec![
        group_record("R-A", "Ring", vec![]),
        group_record("N-A", "Necklace", vec![]),
        group_record("R-B", "Ring", vec![]),
    ]);
    let store = CatalogStore::new(Box::new(StaticCatalogSource::new("mixed", &text)));

    let rings = store
        .get_groups_by_type(JewelryType::Ring)
        .await
        .unwrap()
        .unwrap();
    let ring_ids: Vec<&str> = rings.iter().map(|g| g.unique_id()).collect();
    assert_eq!(ring_ids, vec!["R-A", "R-B"]);

    let only_necklaces = catalog_document(vec![group_record("N-A", "Necklace", vec![])]);
    let store = CatalogStore::new(Box::new(StaticCatalogSource::new("n", &only_necklaces)));
    assert!(store
        .get_groups_by_type(JewelryType::Ring)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_duplicate_ids_are_not_found() {
    let text = catalog_document(vec![
        group_record("G1", "Ring", vec![item_record("Dup"), item_record("Solo")]),
        group_record("G1", "Ring", vec![item_record("Dup")]),
    ]);
    let store = CatalogStore::new(Box::new(StaticCatalogSource::new("dups", &text)));

    assert!(store.get_item("Dup").await.unwrap().is_none());
    assert!(store.get_item("Solo").await.unwrap().is_some());
    assert!(store.get_group("G1").await.unwrap().is_none());
    assert_eq!(store.get_all_groups().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_strict_ids_reject_duplicates() {
    let text = catalog_document(vec![
        group_record("G1", "Ring", vec![item_record("Dup")]),
        group_record("G2", "Ring", vec![item_record("Dup")]),
    ]);
    let store = CatalogStore::with_options(
        Box::new(StaticCatalogSource::new("dups", &text)),
        ParseOptions {
            strict_unique_ids: true,
        },
        PathBuf::from("."),
    );
    let err = store.get_all_groups().await.unwrap_err();
    assert!(matches!(err, CatalogError::MalformedCatalog(_)));
    assert!(!store.is_loaded());
}

#[tokio::test]
async fn test_malformed_catalog_leaves_cache_empty_and_is_retried() {
    let (_dir, path) = write_catalog(&catalog_missing_col_span()).unwrap();
    let store = CatalogStore::new(Box::new(FileCatalogSource::new(&path)));

    let err = store.load_if_needed().await.unwrap_err();
    assert!(matches!(err, CatalogError::MalformedCatalog(_)));
    assert!(store.loaded_groups().is_none());
    assert!(store.get_item("R0").await.is_err());

    fs::write(&path, two_group_catalog()).unwrap();
    assert_eq!(store.get_all_groups().await.unwrap().len(), 2);
    assert!(store.get_item("R0").await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_file_is_source_unavailable_then_retried() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("later.json");
    let store = CatalogStore::new(Box::new(FileCatalogSource::new(&path)));

    let err = store.get_all_groups().await.unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable { .. }));

    fs::write(&path, two_group_catalog()).unwrap();
    assert_eq!(store.get_all_groups().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_loaded_catalog_ignores_later_source_changes() {
    let (_dir, path) = write_catalog(&two_group_catalog()).unwrap();
    let store = CatalogStore::new(Box::new(FileCatalogSource::new(&path)));
    assert_eq!(store.get_all_groups().await.unwrap().len(), 2);

    fs::remove_file(&path).unwrap();
    assert_eq!(store.get_all_groups().await.unwrap().len(), 2);
    assert!(store.get_group("G1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_bundled_catalog() {
    let store = CatalogStore::new(Box::new(StaticCatalogSource::bundled()));
    let groups = store.get_all_groups().await.unwrap();
    assert_eq!(groups.len(), 2);

    let necklaces = store.get_group("Necklaces").await.unwrap().unwrap();
    assert_eq!(necklaces.items().len(), 14);
    assert_eq!(necklaces.top_items().len(), TOP_ITEMS_LIMIT);

    let item = store.get_item("RingsBig-1").await.unwrap().unwrap();
    assert_eq!(item.group_id(), "Rings");
    assert_eq!(item.col_span(), 2);
    assert_eq!(TileTemplate::for_item(item), TileTemplate::RingsBig);

    for group in groups {
        for item in group.items() {
            assert_ne!(TileTemplate::for_item(item), TileTemplate::Default);
        }
    }
}
