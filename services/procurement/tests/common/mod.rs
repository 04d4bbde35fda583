//! 集成测试公共装配

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use procura_adapter_memory::InMemoryRecordStore;
use procura_ports::{Clock, FixedClock, RecordStore};
use procurement::application::{
    ApprovalCommandHandler, ApproveSubmissionCommand, CreateSubmissionCommand,
    DashboardQueryHandler, DashboardSettings, EvaluationCommandHandler, FinalizeEvaluationCommand,
    LegacyLinkMigration, ProcurementCommandHandler, SubmissionCommandHandler,
    UpdateEvaluationCommand,
};
use procurement::domain::submission::Submission;
use procurement::infrastructure::{
    CachedRecordStore, StoreApprovalRepository, StoreEvaluationRepository,
    StoreProcurementRepository, StoreSubmissionRepository,
};

pub type Submissions = StoreSubmissionRepository;
pub type Evaluations = StoreEvaluationRepository;
pub type Approvals = StoreApprovalRepository;
pub type Procurements = StoreProcurementRepository;

/// 内存存储 + 读缓存 + 固定日期
pub struct Harness {
    pub raw: Arc<InMemoryRecordStore>,
    pub cache: Arc<CachedRecordStore>,
    pub clock: Arc<dyn Clock>,
    pub submissions: Arc<Submissions>,
    pub evaluations: Arc<Evaluations>,
    pub approvals: Arc<Approvals>,
    pub procurements: Arc<Procurements>,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl Harness {
    pub fn new(today: NaiveDate) -> Self {
        let raw = Arc::new(InMemoryRecordStore::new());
        let cache = Arc::new(CachedRecordStore::new(
            raw.clone(),
            Duration::from_secs(30),
            1_000,
        ));
        let store: Arc<dyn RecordStore> = cache.clone();

        Self {
            raw,
            cache,
            clock: Arc::new(FixedClock(today)),
            submissions: Arc::new(StoreSubmissionRepository::new(store.clone())),
            evaluations: Arc::new(StoreEvaluationRepository::new(store.clone())),
            approvals: Arc::new(StoreApprovalRepository::new(store.clone())),
            procurements: Arc::new(StoreProcurementRepository::new(store)),
        }
    }

    pub fn submission_handler(&self) -> SubmissionCommandHandler<Submissions, Evaluations> {
        SubmissionCommandHandler::new(
            self.submissions.clone(),
            self.evaluations.clone(),
            self.clock.clone(),
        )
    }

    pub fn evaluation_handler(&self) -> EvaluationCommandHandler<Evaluations> {
        EvaluationCommandHandler::new(self.evaluations.clone())
    }

    pub fn approval_handler(&self) -> ApprovalCommandHandler<Evaluations, Approvals> {
        ApprovalCommandHandler::new(
            self.evaluations.clone(),
            self.approvals.clone(),
            self.clock.clone(),
        )
    }

    pub fn procurement_handler(&self) -> ProcurementCommandHandler<Evaluations, Procurements> {
        ProcurementCommandHandler::new(self.evaluations.clone(), self.procurements.clone())
    }

    pub fn migration(&self) -> LegacyLinkMigration<Submissions, Evaluations, Procurements> {
        LegacyLinkMigration::new(
            self.submissions.clone(),
            self.evaluations.clone(),
            self.procurements.clone(),
        )
    }

    pub fn dashboard(&self) -> DashboardQueryHandler<Submissions, Evaluations, Approvals, Procurements> {
        DashboardQueryHandler::new(
            self.submissions.clone(),
            self.evaluations.clone(),
            self.approvals.clone(),
            self.procurements.clone(),
            DashboardSettings::default(),
        )
    }

    /// 提交一条待审申请
    pub async fn submit(&self, title: &str, unit: &str, amount: i64) -> Submission {
        self.submission_handler()
            .handle_create(CreateSubmissionCommand {
                title: title.to_string(),
                letter_number: Some(format!("{}/UMUM/2025", title)),
                unit: Some(unit.to_string()),
                category: "barang".to_string(),
                amount,
                submission_date: None,
                note: None,
                attachment_url: None,
            })
            .await
            .unwrap()
    }

    /// 提交并审批通过，返回 (申请 ID, 评估表 ID)
    pub async fn submit_and_approve(&self, title: &str, amount: i64) -> (String, String) {
        let submission = self.submit(title, "Umum", amount).await;
        let outcome = self
            .submission_handler()
            .handle_approve(ApproveSubmissionCommand {
                submission_id: submission.id.to_string(),
                reviewed_by: Some("kabag.umum".to_string()),
            })
            .await
            .unwrap();
        (submission.id.to_string(), outcome.evaluation.id.to_string())
    }

    /// 填写并定稿评估表
    pub async fn finalize(&self, evaluation_id: &str, evaluated_amount: i64) {
        let handler = self.evaluation_handler();
        handler
            .handle_update(UpdateEvaluationCommand {
                evaluation_id: evaluation_id.to_string(),
                budget_name: Some("Belanja Modal".to_string()),
                budget_code: Some("5.3.1".to_string()),
                evaluated_amount: Some(evaluated_amount),
            })
            .await
            .unwrap();
        handler
            .handle_finalize(FinalizeEvaluationCommand {
                evaluation_id: evaluation_id.to_string(),
            })
            .await
            .unwrap();
    }
}
