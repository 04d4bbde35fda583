//! 读缓存

mod snapshot_cache;

pub use snapshot_cache::CachedRecordStore;
