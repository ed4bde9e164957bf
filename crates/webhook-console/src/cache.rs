use std::collections::HashMap;

use crate::CacheEntry;

pub const CACHE_PAGE_SIZE: usize = 100;

/// Converts the id → email mapping into pairs sorted descending by id.
///
/// Ids are compared as strings, so `"5"` sorts before `"10"`.
pub fn cache_entries(mapping: HashMap<String, String>) -> Vec<CacheEntry> {
    let mut entries: Vec<CacheEntry> = mapping
        .into_iter()
        .map(|(id, email)| CacheEntry { id, email })
        .collect();
    entries.sort_by(|a, b| b.id.cmp(&a.id));
    entries
}

/// Indices of the cache entries matching `query`.
///
/// The query is lower-cased; the id is matched raw, the email lower-cased.
pub fn filter_cache(entries: &[CacheEntry], query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            entry.id.contains(&query) || entry.email.to_lowercase().contains(&query)
        })
        .map(|(index, _)| index)
        .collect()
}
