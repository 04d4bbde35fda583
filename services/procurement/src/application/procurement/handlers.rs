//! 采购执行命令处理器

use std::sync::Arc;

use procura_errors::{AppError, AppResult};
use tracing::info;

use super::commands::*;
use crate::application::parse_id;
use crate::domain::evaluation::EvaluationRepository;
use crate::domain::procurement::{Procurement, ProcurementRepository};
use crate::error::WorkflowError;

/// 采购执行命令处理器
pub struct ProcurementCommandHandler<E, P>
where
    E: EvaluationRepository,
    P: ProcurementRepository,
{
    evaluations: Arc<E>,
    procurements: Arc<P>,
}

impl<E, P> ProcurementCommandHandler<E, P>
where
    E: EvaluationRepository,
    P: ProcurementRepository,
{
    pub fn new(evaluations: Arc<E>, procurements: Arc<P>) -> Self {
        Self {
            evaluations,
            procurements,
        }
    }

    /// 登记采购执行（评估表须已定稿，且每张评估表最多一条）
    pub async fn handle_create(&self, cmd: CreateProcurementCommand) -> AppResult<Procurement> {
        let evaluation_id = parse_id(&cmd.evaluation_id, "evaluation")?;

        let evaluation = self
            .evaluations
            .find_by_id(&evaluation_id)
            .await?
            .ok_or(WorkflowError::EvaluationNotFound)?;
        if !evaluation.is_final {
            return Err(WorkflowError::EvaluationNotFinal.into());
        }

        if self
            .procurements
            .find_by_evaluation(&evaluation_id)
            .await?
            .is_some()
        {
            return Err(WorkflowError::ProcurementAlreadyExists.into());
        }

        let new = cmd
            .into_new_procurement(evaluation_id)
            .map_err(AppError::validation)?;
        let procurement = self.procurements.create(&new).await?;

        info!(
            procurement_id = %procurement.id,
            form_code = %evaluation.form_code,
            "Procurement recorded"
        );
        Ok(procurement)
    }

    /// 更新采购执行
    pub async fn handle_update(&self, cmd: UpdateProcurementCommand) -> AppResult<Procurement> {
        let procurement_id = parse_id(&cmd.procurement_id, "procurement")?;
        let update = cmd.into_update().map_err(AppError::validation)?;
        if update.is_empty() {
            return Err(WorkflowError::EmptyUpdate.into());
        }

        let existing = self
            .procurements
            .find_by_id(&procurement_id)
            .await?
            .ok_or(WorkflowError::ProcurementNotFound)?;

        // 与已存储的日期合并后再校验
        let start = update.start_date.or(existing.start_date);
        let completion = update.completion_date.or(existing.completion_date);
        if let (Some(start), Some(completion)) = (start, completion)
            && completion < start
        {
            return Err(WorkflowError::InvalidCommand(format!(
                "Completion date {} precedes start date {}",
                completion, start
            ))
            .into());
        }

        self.procurements.update(&procurement_id, &update).await
    }
}
