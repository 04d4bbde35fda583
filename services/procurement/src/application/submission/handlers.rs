//! 采购申请命令处理器

use std::sync::Arc;

use procura_errors::{AppError, AppResult};
use procura_ports::Clock;
use serde::Serialize;
use tracing::{info, warn};

use super::commands::*;
use crate::application::parse_id;
use crate::domain::evaluation::{Evaluation, EvaluationRepository, FormCode, NewEvaluation};
use crate::domain::submission::{Submission, SubmissionRepository, SubmissionReview};
use crate::error::WorkflowError;

/// 审批通过的结果
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalOutcome {
    pub submission: Submission,
    pub evaluation: Evaluation,
}

/// 采购申请命令处理器
pub struct SubmissionCommandHandler<S, E>
where
    S: SubmissionRepository,
    E: EvaluationRepository,
{
    submissions: Arc<S>,
    evaluations: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<S, E> SubmissionCommandHandler<S, E>
where
    S: SubmissionRepository,
    E: EvaluationRepository,
{
    pub fn new(submissions: Arc<S>, evaluations: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            submissions,
            evaluations,
            clock,
        }
    }

    /// 提交申请
    pub async fn handle_create(&self, cmd: CreateSubmissionCommand) -> AppResult<Submission> {
        cmd.validate().map_err(AppError::validation)?;

        let new = cmd
            .into_new_submission(self.clock.today())
            .map_err(AppError::validation)?;
        let submission = self.submissions.create(&new).await?;

        info!(submission_id = %submission.id, "Submission created");
        Ok(submission)
    }

    /// 审批通过
    ///
    /// 先创建草稿评估表，再写入审批结果；后者失败时删除刚创建的评估表，
    /// 删除失败只记录日志，返回原始错误。
    pub async fn handle_approve(&self, cmd: ApproveSubmissionCommand) -> AppResult<ApprovalOutcome> {
        let submission_id = parse_id(&cmd.submission_id, "submission")?;

        let submission = self
            .submissions
            .find_by_id(&submission_id)
            .await?
            .ok_or(WorkflowError::SubmissionNotFound)?;
        self.ensure_awaiting_review(&submission)?;

        if self
            .evaluations
            .find_by_submission(&submission_id)
            .await?
            .is_some()
        {
            return Err(WorkflowError::EvaluationAlreadyExists.into());
        }

        let existing = self.evaluations.list_all().await?;
        let form_code = FormCode::next_for(
            existing.iter().map(|e| e.form_code.as_str()),
            self.clock.today(),
        )
        .map_err(WorkflowError::from)?;

        let evaluation = self
            .evaluations
            .create(&NewEvaluation::draft(form_code, submission_id))
            .await?;

        let review = SubmissionReview::approved(cmd.reviewed_by, self.clock.now());
        let submission = match self.submissions.save_review(&submission_id, &review).await {
            Ok(submission) => submission,
            Err(error) => {
                warn!(
                    submission_id = %submission_id,
                    evaluation_id = %evaluation.id,
                    error = %error,
                    "Approval write failed, removing draft evaluation"
                );
                if let Err(cleanup) = self.evaluations.delete(&evaluation.id).await {
                    warn!(
                        evaluation_id = %evaluation.id,
                        error = %cleanup,
                        "Failed to remove draft evaluation"
                    );
                }
                return Err(error);
            }
        };

        info!(
            submission_id = %submission.id,
            form_code = %evaluation.form_code,
            "Submission approved"
        );
        Ok(ApprovalOutcome {
            submission,
            evaluation,
        })
    }

    /// 拒绝
    pub async fn handle_reject(&self, cmd: RejectSubmissionCommand) -> AppResult<Submission> {
        let submission_id = parse_id(&cmd.submission_id, "submission")?;

        let reason = cmd.reason.trim();
        if reason.is_empty() {
            return Err(WorkflowError::RejectionReasonRequired.into());
        }

        let submission = self
            .submissions
            .find_by_id(&submission_id)
            .await?
            .ok_or(WorkflowError::SubmissionNotFound)?;
        self.ensure_awaiting_review(&submission)?;

        let review = SubmissionReview::rejected(reason.to_string(), cmd.reviewed_by, self.clock.now());
        let submission = self.submissions.save_review(&submission_id, &review).await?;

        info!(submission_id = %submission.id, "Submission rejected");
        Ok(submission)
    }

    fn ensure_awaiting_review(&self, submission: &Submission) -> Result<(), WorkflowError> {
        if submission.is_awaiting_review() {
            Ok(())
        } else {
            Err(WorkflowError::AlreadyReviewed(
                submission.status.clone().unwrap_or_default(),
            ))
        }
    }
}
