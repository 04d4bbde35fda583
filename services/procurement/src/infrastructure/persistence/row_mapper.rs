//! 行与领域对象之间的转换

use procura_errors::{AppError, AppResult};
use procura_ports::Row;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// 序列化为数据行（必须是 JSON 对象）
pub fn to_row<T: Serialize>(value: &T) -> AppResult<Row> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::serialization(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

pub fn from_row<T: DeserializeOwned>(table: &str, row: Row) -> AppResult<T> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| AppError::serialization(format!("{} row: {}", table, e)))
}

/// 批量转换，无法解析的行记录日志后跳过
pub fn from_rows<T: DeserializeOwned>(table: &str, rows: Vec<Row>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.get("id").cloned();
            match from_row(table, row) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(table = %table, id = ?id, error = %e, "Skipping malformed row");
                    None
                }
            }
        })
        .collect()
}

/// 取第一行
pub fn first<T: DeserializeOwned>(table: &str, rows: Vec<Row>) -> AppResult<Option<T>> {
    rows.into_iter().next().map(|row| from_row(table, row)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        id: String,
        qty: i64,
    }

    #[test]
    fn test_to_row_requires_object() {
        assert!(to_row(&42).is_err());
        let row = to_row(&Item {
            id: "a".to_string(),
            qty: 1,
        })
        .unwrap();
        assert_eq!(row.get("qty"), Some(&json!(1)));
    }

    #[test]
    fn test_from_rows_skips_malformed() {
        let rows = vec![
            json!({ "id": "a", "qty": 1 }),
            json!({ "id": "b", "qty": "many" }),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();

        let items: Vec<Item> = from_rows("items", rows);
        assert_eq!(
            items,
            vec![Item {
                id: "a".to_string(),
                qty: 1,
            }]
        );
    }
}
