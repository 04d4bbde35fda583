//! 看板查询处理器

use std::sync::Arc;

use procura_common::{DEFAULT_PAGE_SIZE, PagedResult};
use procura_errors::AppResult;
use tracing::debug;

use super::report::ApprovalSheet;
use super::rows::{ApprovalRow, ProcurementRow, ProgressRow};
use super::snapshot::Snapshot;
use super::summary::StatusSummary;
use crate::application::list_view::{ListView, ListViewConfig, ListViewState};
use crate::application::parse_id;
use crate::domain::approval::ApprovalRepository;
use crate::domain::evaluation::EvaluationRepository;
use crate::domain::procurement::ProcurementRepository;
use crate::domain::submission::SubmissionRepository;
use crate::error::WorkflowError;

/// 看板参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSettings {
    pub page_size: u32,
    /// 金额区间控件的上限哨兵
    pub amount_range_ceiling: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            amount_range_ceiling: 1_000_000_000.0,
        }
    }
}

/// 看板查询处理器
pub struct DashboardQueryHandler<S, E, A, P>
where
    S: SubmissionRepository,
    E: EvaluationRepository,
    A: ApprovalRepository,
    P: ProcurementRepository,
{
    submissions: Arc<S>,
    evaluations: Arc<E>,
    approvals: Arc<A>,
    procurements: Arc<P>,
    progress_view: ListView,
    approval_view: ListView,
    procurement_view: ListView,
}

impl<S, E, A, P> DashboardQueryHandler<S, E, A, P>
where
    S: SubmissionRepository,
    E: EvaluationRepository,
    A: ApprovalRepository,
    P: ProcurementRepository,
{
    pub fn new(
        submissions: Arc<S>,
        evaluations: Arc<E>,
        approvals: Arc<A>,
        procurements: Arc<P>,
        settings: DashboardSettings,
    ) -> Self {
        let view = |search: Vec<&'static str>, range_field: &'static str| {
            ListView::new(
                ListViewConfig::new(search)
                    .with_range(range_field, 0.0, settings.amount_range_ceiling)
                    .with_page_size(settings.page_size),
            )
        };

        Self {
            submissions,
            evaluations,
            approvals,
            procurements,
            progress_view: view(vec!["title", "letter_number", "unit"], "amount"),
            approval_view: view(vec!["form_code", "title", "unit"], "amount"),
            procurement_view: view(vec!["form_code", "title", "vendor"], "offer_amount"),
        }
    }

    /// 读取四张表的快照
    pub async fn snapshot(&self) -> AppResult<Snapshot> {
        let (submissions, evaluations, approvals, procurements) = tokio::try_join!(
            self.submissions.list_all(),
            self.evaluations.list_all(),
            self.approvals.list_all(),
            self.procurements.list_all(),
        )?;

        debug!(
            submissions = submissions.len(),
            evaluations = evaluations.len(),
            approvals = approvals.len(),
            procurements = procurements.len(),
            "Dashboard snapshot loaded"
        );
        Ok(Snapshot {
            submissions,
            evaluations,
            approvals,
            procurements,
        })
    }

    /// 进度看板
    pub async fn progress_board(&self, state: &ListViewState) -> AppResult<PagedResult<ProgressRow>> {
        let snapshot = self.snapshot().await?;
        let joined = snapshot.join();
        let rows: Vec<ProgressRow> = snapshot
            .submissions
            .iter()
            .map(|s| ProgressRow::build(s, &joined))
            .collect();

        Ok(self.progress_view.apply(&rows, state).map(Clone::clone))
    }

    /// 会签看板，可按 `status` 字段筛选 `selesai` / `proses`
    pub async fn approval_board(&self, state: &ListViewState) -> AppResult<PagedResult<ApprovalRow>> {
        let snapshot = self.snapshot().await?;
        let joined = snapshot.join();
        let rows: Vec<ApprovalRow> = snapshot
            .evaluations
            .iter()
            .map(|e| ApprovalRow::build(e, &joined))
            .collect();

        Ok(self.approval_view.apply(&rows, state).map(Clone::clone))
    }

    /// 采购执行看板
    pub async fn procurement_board(
        &self,
        state: &ListViewState,
    ) -> AppResult<PagedResult<ProcurementRow>> {
        let snapshot = self.snapshot().await?;
        let joined = snapshot.join();
        let rows: Vec<ProcurementRow> = snapshot
            .procurements
            .iter()
            .map(|p| ProcurementRow::build(p, &joined))
            .collect();

        Ok(self.procurement_view.apply(&rows, state).map(Clone::clone))
    }

    /// 状态汇总
    pub async fn status_summary(&self) -> AppResult<StatusSummary> {
        let snapshot = self.snapshot().await?;
        Ok(StatusSummary::compute(&snapshot))
    }

    /// 会签单
    pub async fn approval_sheet(&self, evaluation_id: &str) -> AppResult<ApprovalSheet> {
        let evaluation_id = parse_id(evaluation_id, "evaluation")?;
        let evaluation = self
            .evaluations
            .find_by_id(&evaluation_id)
            .await?
            .ok_or(WorkflowError::EvaluationNotFound)?;

        let (submission, record) = tokio::try_join!(
            self.submissions.find_by_id(&evaluation.submission_id),
            self.approvals.find_by_evaluation(&evaluation_id),
        )?;

        Ok(ApprovalSheet::build(
            &evaluation,
            submission.as_ref(),
            record.as_ref(),
        ))
    }
}
