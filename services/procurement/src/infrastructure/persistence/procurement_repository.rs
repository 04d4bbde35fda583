//! 采购执行仓储实现

use std::sync::Arc;

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;
use procura_ports::{Order, RecordStore, Row, StoreQuery};
use serde_json::Value;

use super::row_mapper::{first, from_row, from_rows, to_row};
use super::tables::PROCUREMENTS;
use crate::domain::procurement::{
    NewProcurement, Procurement, ProcurementRepository, ProcurementUpdate,
};

pub struct StoreProcurementRepository {
    store: Arc<dyn RecordStore>,
}

impl StoreProcurementRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProcurementRepository for StoreProcurementRepository {
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Procurement>> {
        let rows = self
            .store
            .list(PROCUREMENTS, &StoreQuery::new().eq("id", id.to_string()))
            .await?;
        first(PROCUREMENTS, rows)
    }

    async fn find_by_evaluation(
        &self,
        evaluation_id: &RecordId,
    ) -> AppResult<Option<Procurement>> {
        let rows = self
            .store
            .list(
                PROCUREMENTS,
                &StoreQuery::new().eq("evaluation_id", evaluation_id.to_string()),
            )
            .await?;
        first(PROCUREMENTS, rows)
    }

    async fn list_all(&self) -> AppResult<Vec<Procurement>> {
        let rows = self
            .store
            .list(PROCUREMENTS, &StoreQuery::new().order(Order::desc("created_at")))
            .await?;
        Ok(from_rows(PROCUREMENTS, rows))
    }

    async fn create(&self, procurement: &NewProcurement) -> AppResult<Procurement> {
        let row = self.store.insert(PROCUREMENTS, to_row(procurement)?).await?;
        from_row(PROCUREMENTS, row)
    }

    async fn update(&self, id: &RecordId, update: &ProcurementUpdate) -> AppResult<Procurement> {
        let row = self.store.update(PROCUREMENTS, id, to_row(update)?).await?;
        from_row(PROCUREMENTS, row)
    }

    async fn link_evaluation(
        &self,
        id: &RecordId,
        evaluation_id: &RecordId,
    ) -> AppResult<Procurement> {
        let mut patch = Row::new();
        patch.insert(
            "evaluation_id".to_string(),
            Value::String(evaluation_id.to_string()),
        );
        let row = self.store.update(PROCUREMENTS, id, patch).await?;
        from_row(PROCUREMENTS, row)
    }
}
