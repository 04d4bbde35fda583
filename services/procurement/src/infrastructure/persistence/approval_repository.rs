//! 会签记录仓储实现

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use procura_common::RecordId;
use procura_errors::AppResult;
use procura_ports::{RecordStore, Row, StoreQuery};
use serde_json::Value;

use super::row_mapper::{first, from_row, from_rows};
use super::tables::APPROVALS;
use crate::domain::approval::{ApprovalRecord, ApprovalRepository, ApprovalRole};

const KEY_COLUMN: &str = "evaluation_id";

pub struct StoreApprovalRepository {
    store: Arc<dyn RecordStore>,
}

impl StoreApprovalRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ApprovalRepository for StoreApprovalRepository {
    async fn find_by_evaluation(
        &self,
        evaluation_id: &RecordId,
    ) -> AppResult<Option<ApprovalRecord>> {
        let rows = self
            .store
            .list(APPROVALS, &StoreQuery::new().eq(KEY_COLUMN, evaluation_id.to_string()))
            .await?;
        first(APPROVALS, rows)
    }

    async fn list_all(&self) -> AppResult<Vec<ApprovalRecord>> {
        let rows = self.store.list(APPROVALS, &StoreQuery::new()).await?;
        Ok(from_rows(APPROVALS, rows))
    }

    async fn save_date(
        &self,
        evaluation_id: &RecordId,
        role: ApprovalRole,
        date: NaiveDate,
    ) -> AppResult<ApprovalRecord> {
        // 只写键列与该角色的日期列
        let mut row = Row::new();
        row.insert(KEY_COLUMN.to_string(), Value::String(evaluation_id.to_string()));
        row.insert(
            role.column().to_string(),
            Value::String(date.format("%Y-%m-%d").to_string()),
        );

        let saved = self.store.upsert(APPROVALS, KEY_COLUMN, row).await?;
        from_row(APPROVALS, saved)
    }
}
