//! 采购申请仓储接口

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;

use super::submission::{NewSubmission, Submission, SubmissionReview};

/// 采购申请仓储接口
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// 创建申请
    async fn create(&self, submission: &NewSubmission) -> AppResult<Submission>;

    /// 根据 ID 查找申请
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Submission>>;

    /// 列出全部申请（按创建时间倒序）
    async fn list_all(&self) -> AppResult<Vec<Submission>>;

    /// 写入审批结果
    async fn save_review(&self, id: &RecordId, review: &SubmissionReview) -> AppResult<Submission>;
}
