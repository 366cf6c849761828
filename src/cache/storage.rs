//! Cache store and its durable JSON representation

use crate::core::FactorMapping;
use crate::error::{FactorsError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// A cache key: the unique-element set of a number collection.
///
/// Two collections with the same unique elements produce equal keys, so
/// order and duplicates never split cache entries.
pub type CacheKey = BTreeSet<i64>;

/// Derive the cache key for a number collection
pub fn cache_key(numbers: &[i64]) -> CacheKey {
    numbers.iter().copied().collect()
}

/// Encode a key as a tuple-formatted string for use as a JSON object key.
///
/// Members are sorted (the set iterates in order), so the encoding is
/// canonical: `{2, 4, 8}` becomes `"(2, 4, 8)"` and a singleton keeps the
/// tuple-marking trailing comma, `"(2,)"`.
pub fn encode_key(key: &CacheKey) -> String {
    let members: Vec<String> = key.iter().map(|n| n.to_string()).collect();
    if members.len() == 1 {
        format!("({},)", members[0])
    } else {
        format!("({})", members.join(", "))
    }
}

/// Decode a tuple-formatted key string back into the exact integer set.
///
/// Returns `None` on any malformed input; keys are parsed, never evaluated.
pub fn decode_key(encoded: &str) -> Option<CacheKey> {
    let inner = encoded.trim().strip_prefix('(')?.strip_suffix(')')?;
    let inner = inner.trim();
    if inner.is_empty() {
        return Some(CacheKey::new());
    }
    // at most one tuple-marking trailing comma
    let inner = inner.strip_suffix(',').unwrap_or(inner);
    inner
        .split(',')
        .map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

/// One named mapping store (`of_cache` or `for_cache`) with optional
/// durable form at `<dir>/<name>.json`.
#[derive(Debug)]
pub struct CacheStore {
    /// Store name, doubling as the cache file stem
    name: &'static str,
    /// In-memory entries keyed by unique-element set
    entries: HashMap<CacheKey, FactorMapping>,
}

impl CacheStore {
    /// Create an empty store
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
        }
    }

    /// Load a store from `<dir>/<name>.json`.
    ///
    /// Any failure (missing file, malformed JSON, undecodable key) falls
    /// back to an empty store; a stale or corrupt cache must never stop
    /// the session.
    pub fn load(name: &'static str, dir: &Path, verbose: bool) -> Self {
        match Self::read_entries(&cache_file_path(dir, name)) {
            Some(entries) => {
                if verbose {
                    eprintln!(
                        "Loaded {} from {}.json, got {} lists...",
                        name,
                        name,
                        entries.len()
                    );
                }
                Self { name, entries }
            }
            None => Self::empty(name),
        }
    }

    fn read_entries(path: &Path) -> Option<HashMap<CacheKey, FactorMapping>> {
        let file = File::open(path).ok()?;
        let reader = BufReader::new(file);
        let raw: HashMap<String, FactorMapping> = serde_json::from_reader(reader).ok()?;
        raw.into_iter()
            .map(|(encoded, mapping)| decode_key(&encoded).map(|key| (key, mapping)))
            .collect()
    }

    /// Write the store to `<dir>/<name>.json`, overwriting unconditionally
    pub fn save(&self, dir: &Path, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!(
                "Saving {} lists from {} to {}.json...",
                self.entries.len(),
                self.name,
                self.name
            );
        }

        // BTreeMap keeps the file content stable across runs
        let raw: BTreeMap<String, &FactorMapping> = self
            .entries
            .iter()
            .map(|(key, mapping)| (encode_key(key), mapping))
            .collect();

        let path = cache_file_path(dir, self.name);
        let file = File::create(&path).map_err(|e| {
            FactorsError::CacheError(format!(
                "Failed to create cache file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &raw)
            .map_err(|e| FactorsError::CacheError(format!("Failed to write cache: {}", e)))?;

        Ok(())
    }

    /// Look up a mapping by key
    pub fn get(&self, key: &CacheKey) -> Option<&FactorMapping> {
        self.entries.get(key)
    }

    /// Insert a computed mapping under its key
    pub fn insert(&mut self, key: CacheKey, mapping: FactorMapping) {
        self.entries.insert(key, mapping);
    }

    /// Number of cached lists
    // len and is_empty are used in tests
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Path of a store's durable file
fn cache_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}
