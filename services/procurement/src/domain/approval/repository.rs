//! 会签记录仓储接口

use async_trait::async_trait;
use chrono::NaiveDate;
use procura_common::RecordId;
use procura_errors::AppResult;

use super::record::ApprovalRecord;
use super::role::ApprovalRole;

/// 会签记录仓储接口
#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    /// 根据评估表 ID 查找
    async fn find_by_evaluation(&self, evaluation_id: &RecordId)
    -> AppResult<Option<ApprovalRecord>>;

    /// 列出全部会签记录
    async fn list_all(&self) -> AppResult<Vec<ApprovalRecord>>;

    /// 以 evaluation_id 为键 upsert 单个角色的日期，不影响其他角色
    async fn save_date(
        &self,
        evaluation_id: &RecordId,
        role: ApprovalRole,
        date: NaiveDate,
    ) -> AppResult<ApprovalRecord>;
}
