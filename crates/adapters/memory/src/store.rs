//! 内存 RecordStore 实现

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use procura_common::{RecordId, new_id};
use procura_errors::{AppError, AppResult};
use procura_ports::{Direction, RecordStore, Row, StoreQuery};
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// 存储操作类型（用于故障注入）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    List,
    Insert,
    Update,
    Delete,
    Upsert,
}

/// 内存数据存储
#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<HashMap<String, Vec<Row>>>,
    faults: Mutex<Vec<(StoreOperation, String)>>,
    list_calls: AtomicUsize,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置表数据（原样写入，不补充 id）
    pub async fn seed(&self, table: &str, rows: Vec<Row>) {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().extend(rows);
    }

    /// 当前表快照
    pub async fn rows(&self, table: &str) -> Vec<Row> {
        let tables = self.tables.read().await;
        tables.get(table).cloned().unwrap_or_default()
    }

    /// 让下一次对 table 的 operation 失败
    pub async fn fail_next(&self, operation: StoreOperation, table: &str) {
        self.faults.lock().await.push((operation, table.to_string()));
    }

    /// list 被调用的次数
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(AtomicOrdering::SeqCst)
    }

    async fn take_fault(&self, operation: StoreOperation, table: &str) -> AppResult<()> {
        let mut faults = self.faults.lock().await;
        if let Some(pos) = faults
            .iter()
            .position(|(op, t)| *op == operation && t == table)
        {
            faults.remove(pos);
            return Err(AppError::store(format!(
                "injected {:?} failure on {}",
                operation, table
            )));
        }
        Ok(())
    }
}

fn id_matches(row: &Row, id: &RecordId) -> bool {
    row.get("id")
        .and_then(Value::as_str)
        .is_some_and(|v| v == id.to_string())
}

/// 补齐数据库默认列
fn stamp(row: &mut Row) {
    row.entry("id")
        .or_insert_with(|| Value::String(new_id().to_string()));
    row.entry("created_at")
        .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
}

fn merge(target: &mut Row, patch: Row) {
    for (k, v) in patch {
        target.insert(k, v);
    }
}

/// 与 PostgREST 默认一致：升序时 null 排在最后
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list(&self, table: &str, query: &StoreQuery) -> AppResult<Vec<Row>> {
        self.list_calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.take_fault(StoreOperation::List, table).await?;

        let tables = self.tables.read().await;
        let mut rows: Vec<Row> = tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                match order.direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }

        debug!(table = %table, count = rows.len(), "In-memory list");
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Row) -> AppResult<Row> {
        self.take_fault(StoreOperation::Insert, table).await?;
        stamp(&mut row);

        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, id: &RecordId, patch: Row) -> AppResult<Row> {
        self.take_fault(StoreOperation::Update, table).await?;

        let mut tables = self.tables.write().await;
        let row = tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|r| id_matches(r, id)))
            .ok_or_else(|| AppError::not_found(format!("{} row {}", table, id)))?;
        merge(row, patch);
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, id: &RecordId) -> AppResult<()> {
        self.take_fault(StoreOperation::Delete, table).await?;

        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|r| !id_matches(r, id));
        }
        Ok(())
    }

    async fn upsert(&self, table: &str, key_column: &str, mut row: Row) -> AppResult<Row> {
        self.take_fault(StoreOperation::Upsert, table).await?;

        let key = row
            .get(key_column)
            .cloned()
            .ok_or_else(|| AppError::validation(format!("upsert row missing {}", key_column)))?;

        // 查找与写入在同一把写锁内完成
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.to_string()).or_default();
        if let Some(existing) = rows.iter_mut().find(|r| r.get(key_column) == Some(&key)) {
            merge(existing, row);
            return Ok(existing.clone());
        }

        stamp(&mut row);
        rows.push(row.clone());
        Ok(row)
    }
}
