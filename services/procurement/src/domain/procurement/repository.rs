//! 采购执行仓储接口

use async_trait::async_trait;
use procura_common::RecordId;
use procura_errors::AppResult;

use super::procurement::{NewProcurement, Procurement, ProcurementUpdate};

/// 采购执行仓储接口
#[async_trait]
pub trait ProcurementRepository: Send + Sync {
    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<Procurement>>;

    /// 根据评估表 ID 查找（一张评估表最多一条）
    async fn find_by_evaluation(&self, evaluation_id: &RecordId)
    -> AppResult<Option<Procurement>>;

    async fn list_all(&self) -> AppResult<Vec<Procurement>>;

    async fn create(&self, procurement: &NewProcurement) -> AppResult<Procurement>;

    async fn update(&self, id: &RecordId, update: &ProcurementUpdate) -> AppResult<Procurement>;

    /// 写入 evaluation_id（历史数据迁移）
    async fn link_evaluation(&self, id: &RecordId, evaluation_id: &RecordId)
    -> AppResult<Procurement>;
}
