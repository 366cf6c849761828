//! Memoizing front-end over the divisor engine

use crate::cache::storage::{cache_key, CacheStore};
use crate::config::Config;
use crate::core::{factors_for, factors_of, FactorMapping};
use crate::error::Result;

/// Computes factor mappings with per-session memoization and optional
/// durable caching.
///
/// The two stores are loaded at most once (at construction) and saved at
/// most once. `save` is called explicitly at the end of a session; the
/// `Drop` impl backstops early exits so the durable files are written on
/// every termination path.
#[derive(Debug)]
pub struct Factorizer {
    config: Config,
    of_cache: CacheStore,
    for_cache: CacheStore,
    hits: u64,
    misses: u64,
    saved: bool,
}

impl Factorizer {
    /// Create a factorizer, loading the durable stores if file caching
    /// is enabled
    pub fn new(config: &Config) -> Self {
        let (of_cache, for_cache) = if config.use_file_cache {
            (
                CacheStore::load("of_cache", &config.cache_dir, config.verbose),
                CacheStore::load("for_cache", &config.cache_dir, config.verbose),
            )
        } else {
            (CacheStore::empty("of_cache"), CacheStore::empty("for_cache"))
        };

        Self {
            config: config.clone(),
            of_cache,
            for_cache,
            hits: 0,
            misses: 0,
            saved: false,
        }
    }

    /// Factors-of mapping for a collection, through the cache when enabled
    pub fn get_factors_of(&mut self, numbers: &[i64]) -> FactorMapping {
        if !self.config.use_cache {
            return factors_of(numbers);
        }
        Self::lookup(
            &mut self.of_cache,
            &mut self.hits,
            &mut self.misses,
            self.config.verbose,
            numbers,
            factors_of,
            "of",
        )
    }

    /// Factors-for mapping for a collection, through the cache when enabled
    pub fn get_factors_for(&mut self, numbers: &[i64]) -> FactorMapping {
        if !self.config.use_cache {
            return factors_for(numbers);
        }
        Self::lookup(
            &mut self.for_cache,
            &mut self.hits,
            &mut self.misses,
            self.config.verbose,
            numbers,
            factors_for,
            "for",
        )
    }

    fn lookup(
        store: &mut CacheStore,
        hits: &mut u64,
        misses: &mut u64,
        verbose: bool,
        numbers: &[i64],
        compute: fn(&[i64]) -> FactorMapping,
        label: &str,
    ) -> FactorMapping {
        let key = cache_key(numbers);

        if let Some(mapping) = store.get(&key) {
            *hits += 1;
            return mapping.clone();
        }

        if verbose {
            eprintln!("List not found, adding to {} cache...", label);
        }
        *misses += 1;
        let mapping = compute(numbers);
        store.insert(key, mapping.clone());
        mapping
    }

    /// Write both stores to disk if file caching is enabled.
    ///
    /// Overwrites the cache files unconditionally, even when the stores
    /// are unchanged or empty. Runs at most once per factorizer.
    pub fn save(&mut self) -> Result<()> {
        if !self.config.use_file_cache || self.saved {
            return Ok(());
        }
        self.saved = true;
        self.of_cache.save(&self.config.cache_dir, self.config.verbose)?;
        self.for_cache.save(&self.config.cache_dir, self.config.verbose)?;
        Ok(())
    }

    /// Cache hits observed this session
    // counters are asserted on in tests
    #[allow(dead_code)]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Cache misses observed this session
    #[allow(dead_code)]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Drop for Factorizer {
    fn drop(&mut self) {
        if let Err(e) = self.save() {
            eprintln!("Warning: Failed to save cache: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    fn memory_config() -> Config {
        Config::new(true, false, false)
    }

    fn file_config(dir: &Path) -> Config {
        Config::new(true, true, false).with_cache_dir(dir.to_path_buf())
    }

    #[test]
    fn test_miss_then_hit() {
        let mut factorizer = Factorizer::new(&memory_config());

        let first = factorizer.get_factors_of(&[2, 4, 8]);
        assert_eq!(factorizer.misses(), 1);
        assert_eq!(factorizer.hits(), 0);

        let second = factorizer.get_factors_of(&[2, 4, 8]);
        assert_eq!(factorizer.misses(), 1);
        assert_eq!(factorizer.hits(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_is_order_and_duplicate_insensitive() {
        let mut factorizer = Factorizer::new(&memory_config());

        let first = factorizer.get_factors_of(&[2, 4, 8]);
        // Same unique-element set: served from cache, stored mapping
        // returned unchanged even though the live list differs.
        let second = factorizer.get_factors_of(&[8, 4, 2, 2]);

        assert_eq!(factorizer.misses(), 1);
        assert_eq!(factorizer.hits(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_of_and_for_use_separate_stores() {
        let mut factorizer = Factorizer::new(&memory_config());

        factorizer.get_factors_of(&[2, 4]);
        factorizer.get_factors_for(&[2, 4]);

        // Same key, different variant: both are misses.
        assert_eq!(factorizer.misses(), 2);
        assert_eq!(factorizer.hits(), 0);
    }

    #[test]
    fn test_disabled_cache_matches_cached_results() {
        let mut cached = Factorizer::new(&memory_config());
        let mut uncached = Factorizer::new(&Config::new(false, false, false));

        let numbers = [2, 3, 4, 6, 12];
        assert_eq!(
            cached.get_factors_of(&numbers),
            uncached.get_factors_of(&numbers)
        );
        assert_eq!(
            cached.get_factors_for(&numbers),
            uncached.get_factors_for(&numbers)
        );

        // The uncached path never touches the stores.
        assert_eq!(uncached.misses(), 0);
        assert_eq!(uncached.hits(), 0);
    }

    #[test]
    fn test_durable_cache_survives_restart() {
        let temp = TempDir::new().unwrap();

        {
            let mut factorizer = Factorizer::new(&file_config(temp.path()));
            factorizer.get_factors_of(&[2, 4, 8]);
            factorizer.get_factors_for(&[2, 4, 8]);
            factorizer.save().unwrap();
        }

        let mut reloaded = Factorizer::new(&file_config(temp.path()));
        let mapping = reloaded.get_factors_of(&[2, 4, 8]);

        assert_eq!(reloaded.hits(), 1);
        assert_eq!(reloaded.misses(), 0);
        assert_eq!(mapping[&8], vec![2, 4]);
    }

    #[test]
    fn test_drop_saves_without_explicit_call() {
        let temp = TempDir::new().unwrap();

        {
            let mut factorizer = Factorizer::new(&file_config(temp.path()));
            factorizer.get_factors_of(&[3, 9]);
        }

        assert!(temp.path().join("of_cache.json").exists());
        assert!(temp.path().join("for_cache.json").exists());
    }

    #[test]
    fn test_save_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut factorizer = Factorizer::new(&file_config(temp.path()));
        factorizer.get_factors_of(&[2, 4]);

        factorizer.save().unwrap();
        factorizer.save().unwrap();
    }

    #[test]
    fn test_empty_session_still_writes_cache_files() {
        let temp = TempDir::new().unwrap();
        let mut factorizer = Factorizer::new(&file_config(temp.path()));
        factorizer.save().unwrap();

        assert!(temp.path().join("of_cache.json").exists());
        assert!(temp.path().join("for_cache.json").exists());
    }
}
