//! 会签命令处理器

use std::sync::Arc;

use procura_errors::{AppError, AppResult};
use procura_ports::Clock;
use serde::Serialize;
use tracing::{debug, info};

use super::commands::*;
use crate::application::parse_id;
use crate::domain::approval::{
    ApprovalProgress, ApprovalRecord, ApprovalRepository, ApprovalRole,
};
use crate::domain::evaluation::EvaluationRepository;
use crate::error::WorkflowError;

/// 保存结果
#[derive(Debug, Clone, Serialize)]
pub struct DateSaved {
    pub record: ApprovalRecord,
    pub role: ApprovalRole,
    /// 请求日期晚于今天而被改为今天
    pub clamped: bool,
    pub progress: ApprovalProgress,
}

/// 会签命令处理器
pub struct ApprovalCommandHandler<E, A>
where
    E: EvaluationRepository,
    A: ApprovalRepository,
{
    evaluations: Arc<E>,
    approvals: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<E, A> ApprovalCommandHandler<E, A>
where
    E: EvaluationRepository,
    A: ApprovalRepository,
{
    pub fn new(evaluations: Arc<E>, approvals: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self {
            evaluations,
            approvals,
            clock,
        }
    }

    /// 写入签署日期
    ///
    /// 锁定的角色直接拒绝且不写入；只 upsert 该角色对应的一列。
    pub async fn handle_set_date(&self, cmd: SetApprovalDateCommand) -> AppResult<DateSaved> {
        let evaluation_id = parse_id(&cmd.evaluation_id, "evaluation")?;
        let role: ApprovalRole = cmd
            .role
            .parse()
            .map_err(|_| AppError::validation(format!("Unknown approval role '{}'", cmd.role)))?;

        if self.evaluations.find_by_id(&evaluation_id).await?.is_none() {
            return Err(WorkflowError::EvaluationNotFound.into());
        }

        let current = self
            .approvals
            .find_by_evaluation(&evaluation_id)
            .await?
            .unwrap_or_else(|| ApprovalRecord::empty(evaluation_id));

        let change = current
            .plan_date_change(role, cmd.date, self.clock.today())
            .map_err(WorkflowError::from)?;
        if change.clamped {
            debug!(role = %role, requested = %cmd.date, "Future approval date clamped to today");
        }

        let record = self
            .approvals
            .save_date(&evaluation_id, change.role, change.date)
            .await?;

        info!(
            evaluation_id = %evaluation_id,
            role = %role,
            date = %change.date,
            "Approval date saved"
        );
        Ok(DateSaved {
            progress: record.progress(),
            record,
            role,
            clamped: change.clamped,
        })
    }
}
