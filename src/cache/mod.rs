//! Cache Module
//!
//! In-memory TTL cache with LRU eviction, used to hold each user's post list.

mod entry;
mod lru;
mod stats;
mod store;


pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::TtlCache;

use crate::models::Post;

// == Public Constants ==
/// Default number of user post lists kept in the cache
pub const DEFAULT_CAPACITY: usize = 100;

/// Default lifetime of a cached post list in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// Per-user post list cache keyed by user id.
pub type PostCache = TtlCache<i64, Vec<Post>>;
