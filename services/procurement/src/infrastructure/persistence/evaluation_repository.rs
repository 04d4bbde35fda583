//! 评估表仓储实现

use std::sync::Arc;

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;
use procura_ports::{Order, RecordStore, Row, StoreQuery};
use serde_json::Value;

use super::row_mapper::{first, from_row, from_rows, to_row};
use super::tables::EVALUATIONS;
use crate::domain::evaluation::{Evaluation, EvaluationInput, EvaluationRepository, NewEvaluation};

pub struct StoreEvaluationRepository {
    store: Arc<dyn RecordStore>,
}

impl StoreEvaluationRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    async fn find_one(&self, query: StoreQuery) -> AppResult<Option<Evaluation>> {
        let rows = self.store.list(EVALUATIONS, &query).await?;
        first(EVALUATIONS, rows)
    }
}

#[async_trait]
impl EvaluationRepository for StoreEvaluationRepository {
    async fn create(&self, evaluation: &NewEvaluation) -> AppResult<Evaluation> {
        let row = self.store.insert(EVALUATIONS, to_row(evaluation)?).await?;
        from_row(EVALUATIONS, row)
    }

    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Evaluation>> {
        self.find_one(StoreQuery::new().eq("id", id.to_string())).await
    }

    async fn find_by_submission(&self, submission_id: &RecordId) -> AppResult<Option<Evaluation>> {
        self.find_one(StoreQuery::new().eq("submission_id", submission_id.to_string()))
            .await
    }

    async fn find_by_form_code(&self, form_code: &str) -> AppResult<Option<Evaluation>> {
        self.find_one(StoreQuery::new().eq("form_code", form_code)).await
    }

    async fn list_all(&self) -> AppResult<Vec<Evaluation>> {
        let rows = self
            .store
            .list(EVALUATIONS, &StoreQuery::new().order(Order::desc("created_at")))
            .await?;
        Ok(from_rows(EVALUATIONS, rows))
    }

    async fn update_input(&self, id: &RecordId, input: &EvaluationInput) -> AppResult<Evaluation> {
        let row = self.store.update(EVALUATIONS, id, to_row(input)?).await?;
        from_row(EVALUATIONS, row)
    }

    async fn mark_final(&self, id: &RecordId) -> AppResult<Evaluation> {
        let mut patch = Row::new();
        patch.insert("is_final".to_string(), Value::Bool(true));
        let row = self.store.update(EVALUATIONS, id, patch).await?;
        from_row(EVALUATIONS, row)
    }

    async fn delete(&self, id: &RecordId) -> AppResult<()> {
        self.store.delete(EVALUATIONS, id).await
    }
}
