//! Result caching for factor computations
//!
//! Results are memoized per unique-element set of the input collection,
//! with optional durable JSON stores (`of_cache.json`, `for_cache.json`)
//! loaded once at startup and saved once at shutdown.

mod factorizer;
mod storage;

pub use factorizer::Factorizer;
#[allow(unused_imports)]
pub use storage::{cache_key, decode_key, encode_key, CacheKey, CacheStore};
