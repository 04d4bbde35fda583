//! 快照读缓存
//!
//! 列表读取按 (表, 查询) 缓存一个刷新周期；任何写入成功后清空全部缓存，
//! 之后的读取重新访问数据存储。写入不重试。
//!
//! 每次失效递增代数；读取开始后代数发生变化时，读到的结果不写入缓存。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use moka::future::Cache as MokaCache;
use procura_common::RecordId;
use procura_errors::AppResult;
use procura_ports::{RecordStore, Row, StoreQuery};
use procura_telemetry::STORE_CACHE_HITS_TOTAL;
use tracing::debug;

/// 带读缓存的数据存储
#[derive(Clone)]
pub struct CachedRecordStore {
    inner: Arc<dyn RecordStore>,
    cache: MokaCache<String, Arc<Vec<Row>>>,
    generation: Arc<AtomicU64>,
}

impl CachedRecordStore {
    pub fn new(inner: Arc<dyn RecordStore>, ttl: Duration, max_capacity: u64) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self {
            inner,
            cache,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 清空全部缓存
    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cache.invalidate_all();
        debug!("Snapshot cache invalidated");
    }

    /// 定时刷新：丢弃旧快照，下次读取时重新拉取
    pub async fn refresh(&self) {
        self.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    fn after_write<T>(&self, result: AppResult<T>) -> AppResult<T> {
        if result.is_ok() {
            self.invalidate_all();
        }
        result
    }
}

#[async_trait]
impl RecordStore for CachedRecordStore {
    async fn list(&self, table: &str, query: &StoreQuery) -> AppResult<Vec<Row>> {
        let key = query.cache_key(table);
        if let Some(rows) = self.cache.get(&key).await {
            counter!(STORE_CACHE_HITS_TOTAL, "table" => table.to_string()).increment(1);
            return Ok(rows.as_ref().clone());
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let rows = self.inner.list(table, query).await?;
        if self.generation.load(Ordering::SeqCst) == generation {
            self.cache.insert(key.clone(), Arc::new(rows.clone())).await;
            // 插入与失效之间仍可能有写入
            if self.generation.load(Ordering::SeqCst) != generation {
                self.cache.invalidate(&key).await;
            }
        } else {
            debug!(table = %table, "Write landed during read, result not cached");
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Row) -> AppResult<Row> {
        let result = self.inner.insert(table, row).await;
        self.after_write(result)
    }

    async fn update(&self, table: &str, id: &RecordId, patch: Row) -> AppResult<Row> {
        let result = self.inner.update(table, id, patch).await;
        self.after_write(result)
    }

    async fn delete(&self, table: &str, id: &RecordId) -> AppResult<()> {
        let result = self.inner.delete(table, id).await;
        self.after_write(result)
    }

    async fn upsert(&self, table: &str, key_column: &str, row: Row) -> AppResult<Row> {
        let result = self.inner.upsert(table, key_column, row).await;
        self.after_write(result)
    }
}
