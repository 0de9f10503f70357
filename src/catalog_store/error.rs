use thiserror::Error;

/// Errors that abort a catalog load. The cache is never touched when one of
/// these is returned, so the next query retries the load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog source {location} unavailable: {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),
}

/// Why a lookup produced no result. Lookups report these as an absent value,
/// never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMiss {
    NotFound,
    Ambiguous { matches: usize },
}

/// Returns the single element yielded by `matches`, or why there wasn't one.
pub fn find_unique<T, I>(matches: I) -> Result<T, LookupMiss>
where
    I: IntoIterator<Item = T>,
{
    let mut matches = matches.into_iter();
    let first = matches.next().ok_or(LookupMiss::NotFound)?;
    let extra = matches.count();
    if extra > 0 {
        return Err(LookupMiss::Ambiguous { matches: extra + 1 });
    }
    Ok(first)
}
