use procura_errors::AppError;
use thiserror::Error;

use crate::domain::approval::ApprovalError;
use crate::domain::evaluation::FormCodeError;

/// 业务流程错误
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Submission not found")]
    SubmissionNotFound,
    #[error("Evaluation not found")]
    EvaluationNotFound,
    #[error("Procurement not found")]
    ProcurementNotFound,
    #[error("Submission has already been reviewed (status: {0})")]
    AlreadyReviewed(String),
    #[error("Submission already has an evaluation")]
    EvaluationAlreadyExists,
    #[error("Rejection reason is required")]
    RejectionReasonRequired,
    #[error("Evaluation is final and can no longer be edited")]
    EvaluationFinalized,
    #[error("Evaluation is not final yet")]
    EvaluationNotFinal,
    #[error("Evaluation is missing required fields: {}", .0.join(", "))]
    EvaluationIncomplete(Vec<&'static str>),
    #[error("Evaluation already has a procurement record")]
    ProcurementAlreadyExists,
    #[error("Nothing to update")]
    EmptyUpdate,
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error(transparent)]
    FormCode(#[from] FormCodeError),
    #[error(transparent)]
    Approval(#[from] ApprovalError),
}

impl From<WorkflowError> for AppError {
    fn from(error: WorkflowError) -> Self {
        match error {
            WorkflowError::SubmissionNotFound
            | WorkflowError::EvaluationNotFound
            | WorkflowError::ProcurementNotFound => AppError::NotFound(error.to_string()),
            WorkflowError::AlreadyReviewed(_)
            | WorkflowError::EvaluationAlreadyExists
            | WorkflowError::ProcurementAlreadyExists => AppError::Conflict(error.to_string()),
            WorkflowError::RejectionReasonRequired
            | WorkflowError::EvaluationIncomplete(_)
            | WorkflowError::EmptyUpdate
            | WorkflowError::InvalidCommand(_) => AppError::Validation(error.to_string()),
            WorkflowError::EvaluationFinalized
            | WorkflowError::EvaluationNotFinal
            | WorkflowError::Approval(_) => AppError::FailedPrecondition(error.to_string()),
            WorkflowError::FormCode(FormCodeError::SequenceExhausted { .. }) => {
                AppError::Conflict(error.to_string())
            }
            WorkflowError::FormCode(e) => AppError::Internal(e.to_string()),
        }
    }
}
