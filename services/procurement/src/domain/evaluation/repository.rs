//! 评估表仓储接口

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;

use super::evaluation::{Evaluation, EvaluationInput, NewEvaluation};

/// 评估表仓储接口
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// 创建评估表
    async fn create(&self, evaluation: &NewEvaluation) -> AppResult<Evaluation>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Evaluation>>;

    /// 根据申请 ID 查找（一个申请最多一张评估表）
    async fn find_by_submission(&self, submission_id: &RecordId) -> AppResult<Option<Evaluation>>;

    /// 根据编号查找
    async fn find_by_form_code(&self, form_code: &str) -> AppResult<Option<Evaluation>>;

    /// 列出全部评估表
    async fn list_all(&self) -> AppResult<Vec<Evaluation>>;

    /// 写入评估人填写的字段
    async fn update_input(&self, id: &RecordId, input: &EvaluationInput) -> AppResult<Evaluation>;

    /// 标记为定稿
    async fn mark_final(&self, id: &RecordId) -> AppResult<Evaluation>;

    /// 删除（仅用于补偿回滚）
    async fn delete(&self, id: &RecordId) -> AppResult<()>;
}
