//! Configuration types for lucidshark-factors

use std::path::PathBuf;

/// Configuration options for a factorizer session
#[derive(Debug, Clone)]
pub struct Config {
    /// Memoize results in memory, keyed by the unique-element set
    pub use_cache: bool,

    /// Load the caches from disk at startup and save them at shutdown
    pub use_file_cache: bool,

    /// Narrate cache loads, saves, and misses on stderr
    pub verbose: bool,

    /// Directory holding the cache files (default: current directory)
    pub cache_dir: PathBuf,
}

impl Config {
    /// Build a config from the three session options.
    ///
    /// File caching reads and writes through the in-memory cache, so
    /// `use_file_cache` forces `use_cache` on. The coupling is applied
    /// here, in construction, rather than at the use sites.
    pub fn new(use_cache: bool, use_file_cache: bool, verbose: bool) -> Self {
        Self {
            use_cache: use_cache || use_file_cache,
            use_file_cache,
            verbose,
            cache_dir: PathBuf::from("."),
        }
    }

    /// Override the directory holding the cache files
    // used by tests to point the stores at a temp directory
    #[allow(dead_code)]
    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = dir;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(true, true, false)
    }
}
