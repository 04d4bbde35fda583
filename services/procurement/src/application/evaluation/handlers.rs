//! 评估表命令处理器
//!
//! 定稿后的评估表不可再修改

use std::sync::Arc;

use procura_common::RecordId;
use procura_errors::{AppError, AppResult};
use tracing::info;

use super::commands::*;
use crate::application::parse_id;
use crate::domain::evaluation::{Evaluation, EvaluationRepository};
use crate::error::WorkflowError;

/// 评估表命令处理器
pub struct EvaluationCommandHandler<E>
where
    E: EvaluationRepository,
{
    evaluations: Arc<E>,
}

impl<E> EvaluationCommandHandler<E>
where
    E: EvaluationRepository,
{
    pub fn new(evaluations: Arc<E>) -> Self {
        Self { evaluations }
    }

    /// 更新评估人填写的字段
    pub async fn handle_update(&self, cmd: UpdateEvaluationCommand) -> AppResult<Evaluation> {
        let evaluation_id = parse_id(&cmd.evaluation_id, "evaluation")?;
        let input = cmd.into_input().map_err(AppError::validation)?;
        if input.is_empty() {
            return Err(WorkflowError::EmptyUpdate.into());
        }

        let evaluation = self.load(&evaluation_id).await?;
        if evaluation.is_final {
            return Err(WorkflowError::EvaluationFinalized.into());
        }

        self.evaluations.update_input(&evaluation_id, &input).await
    }

    /// 定稿，已定稿时直接返回
    pub async fn handle_finalize(&self, cmd: FinalizeEvaluationCommand) -> AppResult<Evaluation> {
        let evaluation_id = parse_id(&cmd.evaluation_id, "evaluation")?;

        let evaluation = self.load(&evaluation_id).await?;
        if evaluation.is_final {
            return Ok(evaluation);
        }

        let missing = evaluation.missing_final_fields();
        if !missing.is_empty() {
            return Err(WorkflowError::EvaluationIncomplete(missing).into());
        }

        let evaluation = self.evaluations.mark_final(&evaluation_id).await?;
        info!(evaluation_id = %evaluation.id, form_code = %evaluation.form_code, "Evaluation finalized");
        Ok(evaluation)
    }

    async fn load(&self, id: &RecordId) -> AppResult<Evaluation> {
        self.evaluations
            .find_by_id(id)
            .await?
            .ok_or_else(|| WorkflowError::EvaluationNotFound.into())
    }
}
