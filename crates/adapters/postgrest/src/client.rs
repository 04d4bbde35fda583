//! PostgREST RecordStore 实现

use std::time::Instant;

use async_trait::async_trait;
use metrics::{counter, histogram};
use procura_common::RecordId;
use procura_errors::{AppError, AppResult};
use procura_ports::{Direction, RecordStore, Row, StoreQuery, value_to_param};
use procura_telemetry::{STORE_ERRORS_TOTAL, STORE_REQUEST_DURATION_MS, STORE_REQUESTS_TOTAL};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use secrecy::ExposeSecret;
use tracing::{debug, warn};

use crate::config::PostgrestConfig;
use crate::error::{map_response_error, map_transport_error};

const PREFER_REPRESENTATION: &str = "return=representation";
const PREFER_MERGE: &str = "resolution=merge-duplicates,return=representation";

/// PostgREST 客户端
#[derive(Clone)]
pub struct PostgrestStore {
    client: Client,
    config: PostgrestConfig,
}

impl PostgrestStore {
    pub fn new(config: PostgrestConfig) -> AppResult<Self> {
        let key = config.api_key.expose_secret();
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(key)
                .map_err(|e| AppError::validation(format!("Invalid API key: {}", e)))?,
        );
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|e| AppError::validation(format!("Invalid API key: {}", e)))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// 将查询转换为 PostgREST 查询参数
    pub fn query_params(query: &StoreQuery) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for filter in &query.filters {
            params.push((
                filter.column.clone(),
                format!("eq.{}", value_to_param(&filter.value)),
            ));
        }
        if let Some(order) = &query.order {
            let dir = match order.direction {
                Direction::Asc => "asc.nullslast",
                Direction::Desc => "desc.nullsfirst",
            };
            params.push(("order".to_string(), format!("{}.{}", order.column, dir)));
        }
        params
    }

    /// 发送请求并解析为行列表，记录指标
    async fn send(
        &self,
        request: RequestBuilder,
        table: &str,
        operation: &'static str,
    ) -> AppResult<Vec<Row>> {
        let start = Instant::now();
        counter!(STORE_REQUESTS_TOTAL, "table" => table.to_string(), "operation" => operation)
            .increment(1);

        let result = self.execute(request, table, operation).await;

        histogram!(
            STORE_REQUEST_DURATION_MS,
            "table" => table.to_string(),
            "operation" => operation
        )
        .record(start.elapsed().as_millis() as f64);

        if let Err(e) = &result {
            counter!(STORE_ERRORS_TOTAL, "table" => table.to_string(), "operation" => operation)
                .increment(1);
            warn!(table = %table, operation, error = %e, "Record store request failed");
        }
        result
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        table: &str,
        operation: &'static str,
    ) -> AppResult<Vec<Row>> {
        let context = format!("{} {}", operation, table);
        let response = request
            .send()
            .await
            .map_err(|e| map_transport_error(e, &context))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, &context))?;

        if !status.is_success() {
            return Err(map_response_error(status.as_u16(), &body, &context));
        }
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<Row> = serde_json::from_str(&body)
            .map_err(|e| AppError::serialization(format!("{}: {}", context, e)))?;
        debug!(table = %table, operation, count = rows.len(), "Record store response");
        Ok(rows)
    }

    fn first_row(rows: Vec<Row>, table: &str, operation: &str) -> AppResult<Row> {
        rows.into_iter().next().ok_or_else(|| {
            AppError::store(format!("{} {} returned no representation", operation, table))
        })
    }
}

#[async_trait]
impl RecordStore for PostgrestStore {
    async fn list(&self, table: &str, query: &StoreQuery) -> AppResult<Vec<Row>> {
        let request = self
            .client
            .get(self.config.table_url(table))
            .query(&Self::query_params(query));
        self.send(request, table, "list").await
    }

    async fn insert(&self, table: &str, row: Row) -> AppResult<Row> {
        let request = self
            .client
            .post(self.config.table_url(table))
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&row);
        let rows = self.send(request, table, "insert").await?;
        Self::first_row(rows, table, "insert")
    }

    async fn update(&self, table: &str, id: &RecordId, patch: Row) -> AppResult<Row> {
        let request = self
            .client
            .patch(self.config.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&patch);
        let rows = self.send(request, table, "update").await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("{} row {}", table, id)))
    }

    async fn delete(&self, table: &str, id: &RecordId) -> AppResult<()> {
        let request = self
            .client
            .delete(self.config.table_url(table))
            .query(&[("id", format!("eq.{}", id))]);
        self.send(request, table, "delete").await?;
        Ok(())
    }

    async fn upsert(&self, table: &str, key_column: &str, row: Row) -> AppResult<Row> {
        let request = self
            .client
            .post(self.config.table_url(table))
            .query(&[("on_conflict", key_column)])
            .header("Prefer", PREFER_MERGE)
            .json(&row);
        let rows = self.send(request, table, "upsert").await?;
        Self::first_row(rows, table, "upsert")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procura_ports::Order;

    #[test]
    fn test_query_params() {
        let query = StoreQuery::new()
            .eq("submission_id", "0192")
            .eq("is_final", true)
            .order(Order::desc("created_at"));
        let params = PostgrestStore::query_params(&query);

        assert_eq!(params[0], ("select".to_string(), "*".to_string()));
        assert_eq!(params[1], ("submission_id".to_string(), "eq.0192".to_string()));
        assert_eq!(params[2], ("is_final".to_string(), "eq.true".to_string()));
        assert_eq!(
            params[3],
            ("order".to_string(), "created_at.desc.nullsfirst".to_string())
        );
    }
}
