use crate::StrError;
use std::collections::HashMap;

/// Identifies a run by a name and the exact bits of its input parameters
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CacheKey {
    name: String,
    bits: Vec<u64>,
}

impl CacheKey {
    /// Allocates a new instance
    ///
    /// Note: -0.0 and 0.0 map to the same key.
    pub fn new(name: &str, values: &[f64]) -> Self {
        let bits = values
            .iter()
            .map(|v| if *v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() })
            .collect();
        CacheKey {
            name: name.to_string(),
            bits,
        }
    }
}

/// Memoizes results of expensive runs
///
/// The cache is owned by the caller, thus the solvers remain free of global state.
pub struct RunCache<T> {
    entries: HashMap<CacheKey, T>,
    hits: usize,
    misses: usize,
}

impl<T> RunCache<T> {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        RunCache {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached result or computes (and stores) a new one
    ///
    /// Errors are returned without being stored.
    pub fn get_or_compute<F>(&mut self, key: CacheKey, compute: F) -> Result<&T, StrError>
    where
        F: FnOnce() -> Result<T, StrError>,
    {
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            let value = compute()?;
            self.misses += 1;
            self.entries.insert(key.clone(), value);
        }
        self.entries.get(&key).ok_or("cache entry is missing")
    }

    /// Stores a result computed elsewhere, replacing any previous entry
    pub fn insert(&mut self, key: CacheKey, value: T) -> &T {
        self.misses += 1;
        self.entries.insert(key.clone(), value);
        &self.entries[&key]
    }

    /// Returns the cached result, if any
    pub fn get(&self, key: &CacheKey) -> Option<&T> {
        self.entries.get(key)
    }

    /// Returns the number of cached results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of lookups served from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Returns the number of computed results
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
