//! Validation for parsed catalog records.

use super::CatalogError;
use crate::catalog::CatalogGroup;
use std::collections::HashMap;

pub fn validate_unique_id(kind: &str, unique_id: &str) -> Result<(), CatalogError> {
    if unique_id.trim().is_empty() {
        return Err(CatalogError::MalformedCatalog(format!(
            "{} has an empty UniqueId",
            kind
        )));
    }
    Ok(())
}

/// Spans arrive as strings and must hold a positive integer.
pub fn parse_span(field: &str, owner_id: &str, raw: &str) -> Result<u32, CatalogError> {
    let value: u32 = raw.trim().parse().map_err(|_| {
        CatalogError::MalformedCatalog(format!(
            "Item {} has a non-integer {}: {:?}",
            owner_id, field, raw
        ))
    })?;
    if value < 1 {
        return Err(CatalogError::MalformedCatalog(format!(
            "Item {} has {} {}, must be at least 1",
            owner_id, field, value
        )));
    }
    Ok(value)
}

/// A unique id used more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub kind: &'static str,
    pub unique_id: String,
    pub occurrences: usize,
}

fn collect_duplicates<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    out: &mut Vec<DuplicateId>,
) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for id in ids {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }
    for id in order {
        let occurrences = counts[id];
        if occurrences > 1 {
            out.push(DuplicateId {
                kind,
                unique_id: id.to_owned(),
                occurrences,
            });
        }
    }
}

/// Group ids and item ids live in separate namespaces; item ids are checked
/// across all groups.
pub fn find_duplicate_ids(groups: &[CatalogGroup]) -> Vec<DuplicateId> {
    let mut out = Vec::new();
    collect_duplicates("Group", groups.iter().map(|g| g.unique_id()), &mut out);
    collect_duplicates(
        "Item",
        groups
            .iter()
            .flat_map(|g| g.items().iter().map(|i| i.unique_id())),
        &mut out,
    );
    out
}
