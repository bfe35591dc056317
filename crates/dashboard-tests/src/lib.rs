#![allow(dead_code)]

use fallback_store::{MemoryBlobStore, ParameterCache};
use model::core::filter::FilterCondition;
use std::sync::Arc;


/// One condition per comparison kind, with parameter ids matching the
/// seeded fallback list.
pub fn sample_conditions() -> Vec<FilterCondition> {
    vec![
        FilterCondition::greater_than(1, "20"),
        FilterCondition::less_than(2, "100"),
        FilterCondition::equal(3, "42"),
        FilterCondition::between(4, "5", "9"),
    ]
}

/// A parameter cache over a fresh in-memory store.
pub fn memory_cache() -> ParameterCache {
    ParameterCache::new(Arc::new(MemoryBlobStore::new()))
}
