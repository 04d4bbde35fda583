//! Record Store trait 定义
//!
//! 远端托管数据库的通用表操作接口，行以 JSON 对象表示

use std::fmt;

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 一行数据
pub type Row = Map<String, Value>;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Asc,
    Desc,
}

/// 排序条件
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }
}

/// 相等过滤条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqFilter {
    pub column: String,
    pub value: Value,
}

/// 列表查询：相等过滤 + 可选排序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreQuery {
    pub filters: Vec<EqFilter>,
    pub order: Option<Order>,
}

impl StoreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(EqFilter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// 判断一行是否满足全部过滤条件
    pub fn matches(&self, row: &Row) -> bool {
        self.filters
            .iter()
            .all(|f| row.get(&f.column).is_some_and(|v| v == &f.value))
    }

    /// 用作缓存键的稳定表示
    pub fn cache_key(&self, table: &str) -> String {
        format!("{}?{}", table, self)
    }
}

impl fmt::Display for StoreQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .filters
            .iter()
            .map(|flt| format!("{}=eq.{}", flt.column, value_to_param(&flt.value)))
            .collect();
        if let Some(order) = &self.order {
            let dir = match order.direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            parts.push(format!("order={}.{}", order.column, dir));
        }
        write!(f, "{}", parts.join("&"))
    }
}

/// 将 JSON 值转为查询参数文本（字符串不带引号）
pub fn value_to_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// 数据存储 trait
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// 查询表中满足条件的行
    async fn list(&self, table: &str, query: &StoreQuery) -> AppResult<Vec<Row>>;

    /// 插入一行，返回包含服务端生成字段（id、created_at）的完整行
    async fn insert(&self, table: &str, row: Row) -> AppResult<Row>;

    /// 按 ID 局部更新
    async fn update(&self, table: &str, id: &RecordId, patch: Row) -> AppResult<Row>;

    /// 按 ID 删除（仅用于补偿回滚）
    async fn delete(&self, table: &str, id: &RecordId) -> AppResult<()>;

    /// 以 key_column 为冲突键的插入或合并更新，只写入 row 中出现的列
    async fn upsert(&self, table: &str, key_column: &str, row: Row) -> AppResult<Row>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_query_matches() {
        let q = StoreQuery::new().eq("status", "pending");
        assert!(q.matches(&row(json!({"status": "pending", "title": "Laptop"}))));
        assert!(!q.matches(&row(json!({"status": "approved"}))));
        assert!(!q.matches(&row(json!({"title": "no status"}))));
        assert!(StoreQuery::new().matches(&row(json!({}))));
    }

    #[test]
    fn test_query_display() {
        let q = StoreQuery::new()
            .eq("submission_id", "abc")
            .eq("is_final", true)
            .order(Order::desc("created_at"));
        assert_eq!(
            q.to_string(),
            "submission_id=eq.abc&is_final=eq.true&order=created_at.desc"
        );
        assert_eq!(q.cache_key("form_evaluasi"), format!("form_evaluasi?{}", q));
    }
}
