//! 采购申请仓储实现

use std::sync::Arc;

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;
use procura_ports::{Order, RecordStore, StoreQuery};

use super::row_mapper::{first, from_row, from_rows, to_row};
use super::tables::SUBMISSIONS;
use crate::domain::submission::{NewSubmission, Submission, SubmissionRepository, SubmissionReview};

pub struct StoreSubmissionRepository {
    store: Arc<dyn RecordStore>,
}

impl StoreSubmissionRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmissionRepository for StoreSubmissionRepository {
    async fn create(&self, submission: &NewSubmission) -> AppResult<Submission> {
        let row = self.store.insert(SUBMISSIONS, to_row(submission)?).await?;
        from_row(SUBMISSIONS, row)
    }

    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Submission>> {
        let rows = self
            .store
            .list(SUBMISSIONS, &StoreQuery::new().eq("id", id.to_string()))
            .await?;
        first(SUBMISSIONS, rows)
    }

    async fn list_all(&self) -> AppResult<Vec<Submission>> {
        let rows = self
            .store
            .list(SUBMISSIONS, &StoreQuery::new().order(Order::desc("created_at")))
            .await?;
        Ok(from_rows(SUBMISSIONS, rows))
    }

    async fn save_review(&self, id: &RecordId, review: &SubmissionReview) -> AppResult<Submission> {
        let row = self.store.update(SUBMISSIONS, id, to_row(review)?).await?;
        from_row(SUBMISSIONS, row)
    }
}
