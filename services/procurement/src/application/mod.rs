//! 应用层模块

pub mod approval;
pub mod dashboard;
pub mod evaluation;
pub mod list_view;
pub mod procurement;
pub mod submission;

use procura_common::RecordId;
use procura_errors::{AppError, AppResult};

pub use approval::{ApprovalCommandHandler, DateSaved, SetApprovalDateCommand};
pub use dashboard::{ApprovalSheet, DashboardQueryHandler, DashboardSettings, StatusSummary};
pub use evaluation::{EvaluationCommandHandler, FinalizeEvaluationCommand, UpdateEvaluationCommand};
pub use list_view::{ListView, ListViewConfig, ListViewState};
pub use procurement::{
    CreateProcurementCommand, LegacyLinkMigration, LinkLegacyProcurementsCommand, LinkReport,
    ProcurementCommandHandler, UpdateProcurementCommand,
};
pub use submission::{
    ApprovalOutcome, ApproveSubmissionCommand, CreateSubmissionCommand, RejectSubmissionCommand,
    SubmissionCommandHandler,
};

/// 解析命令中的记录 ID
pub(crate) fn parse_id(raw: &str, what: &str) -> AppResult<RecordId> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid {} ID: '{}'", what, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = RecordId::new();
        assert_eq!(parse_id(&format!(" {} ", id), "submission").ok(), Some(id));
        assert!(matches!(
            parse_id("abc", "submission"),
            Err(AppError::Validation(_))
        ));
    }
}
