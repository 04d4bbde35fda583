//! 看板行

use chrono::NaiveDate;
use procura_common::RecordId;
use procura_domain_core::Rupiah;
use serde::Serialize;

use crate::application::list_view::{FieldValue, Listable};
use crate::domain::approval::{ApprovalProgress, ApprovalRecord, ApprovalRole, RoleState};
use crate::domain::evaluation::Evaluation;
use crate::domain::procurement::Procurement;
use crate::domain::progress::{Progress, Stage, StageView, stage_from_procurement_status};
use crate::domain::submission::{Category, Submission, UNTITLED};

use super::snapshot::Joined;

fn amount(value: Option<Rupiah>) -> FieldValue {
    FieldValue::Number(value.map(|a| a.to_f64()))
}

/// 存储中的标题；空白视为缺失，不落到占位标题
fn stored_title(submission: Option<&Submission>) -> Option<String> {
    submission
        .and_then(|s| s.title.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn date(value: Option<NaiveDate>) -> FieldValue {
    FieldValue::Text(value.map(|d| d.format("%Y-%m-%d").to_string()))
}

/// 进度看板行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRow {
    pub submission_id: RecordId,
    pub title: String,
    #[serde(skip)]
    stored_title: Option<String>,
    pub letter_number: Option<String>,
    pub unit: Option<String>,
    pub category: Category,
    pub amount: Option<Rupiah>,
    pub submission_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub form_code: Option<String>,
    pub progress: Progress,
    pub stages: Vec<StageView>,
}

impl ProgressRow {
    pub fn build(submission: &Submission, joined: &Joined<'_>) -> Self {
        let progress = joined.progress_of(submission);
        Self {
            submission_id: submission.id,
            title: submission.display_title(),
            stored_title: stored_title(Some(submission)),
            letter_number: submission.letter_number.clone(),
            unit: submission.unit.clone(),
            category: submission.category,
            amount: submission.amount,
            submission_date: submission.submission_date,
            status: submission.status.clone(),
            form_code: joined
                .evaluation_for(&submission.id)
                .map(|e| e.form_code.clone()),
            stages: progress.stage_views(),
            progress,
        }
    }
}

impl Listable for ProgressRow {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "title" => FieldValue::text(self.stored_title.as_deref()),
            "letter_number" => FieldValue::text(self.letter_number.as_deref()),
            "unit" => FieldValue::text(self.unit.as_deref()),
            "category" => FieldValue::text(Some(self.category.as_str())),
            "status" => FieldValue::text(self.status.as_deref()),
            "stage" => FieldValue::text(Some(self.progress.stage.as_str())),
            "form_code" => FieldValue::text(self.form_code.as_deref()),
            "amount" => amount(self.amount),
            "submission_date" => date(self.submission_date),
            _ => FieldValue::Text(None),
        }
    }
}

/// 会签看板行（每张评估表一行）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovalRow {
    pub evaluation_id: RecordId,
    pub form_code: String,
    pub title: String,
    #[serde(skip)]
    stored_title: Option<String>,
    pub unit: Option<String>,
    /// 评估金额，缺失时取申请金额
    pub amount: Option<Rupiah>,
    pub is_final: bool,
    pub roles: Vec<RoleState>,
    pub current_role: Option<ApprovalRole>,
    pub signed: usize,
    pub progress: ApprovalProgress,
}

impl ApprovalRow {
    pub fn build(evaluation: &Evaluation, joined: &Joined<'_>) -> Self {
        let submission = joined.submission(&evaluation.submission_id);
        let record = joined
            .approval_for(&evaluation.id)
            .cloned()
            .unwrap_or_else(|| ApprovalRecord::empty(evaluation.id));

        Self {
            evaluation_id: evaluation.id,
            form_code: evaluation.form_code.clone(),
            title: submission
                .map(Submission::display_title)
                .unwrap_or_else(|| UNTITLED.to_string()),
            stored_title: stored_title(submission),
            unit: submission.and_then(|s| s.unit.clone()),
            amount: evaluation
                .evaluated_amount
                .or_else(|| submission.and_then(|s| s.amount)),
            is_final: evaluation.is_final,
            roles: record.role_states(),
            current_role: record.current_role(),
            signed: record.signed_count(),
            progress: record.progress(),
        }
    }
}

impl Listable for ApprovalRow {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "form_code" => FieldValue::text(Some(self.form_code.as_str())),
            "title" => FieldValue::text(self.stored_title.as_deref()),
            "unit" => FieldValue::text(self.unit.as_deref()),
            "status" => FieldValue::text(Some(self.progress.code())),
            "current_role" => FieldValue::text(self.current_role.map(|r| r.label())),
            "amount" => amount(self.amount),
            "signed" => FieldValue::Number(Some(self.signed as f64)),
            _ => FieldValue::Text(None),
        }
    }
}

/// 采购执行看板行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcurementRow {
    pub procurement_id: RecordId,
    pub evaluation_id: Option<RecordId>,
    pub form_code: Option<String>,
    pub title: String,
    #[serde(skip)]
    stored_title: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<String>,
    pub stage: Stage,
    pub estimate_amount: Option<Rupiah>,
    pub offer_amount: Option<Rupiah>,
    pub realized_amount: Option<Rupiah>,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub handover_date: Option<NaiveDate>,
}

impl ProcurementRow {
    pub fn build(procurement: &Procurement, joined: &Joined<'_>) -> Self {
        let evaluation = procurement
            .evaluation_id
            .and_then(|id| joined.evaluation(&id));
        let submission = evaluation.and_then(|e| joined.submission(&e.submission_id));

        Self {
            procurement_id: procurement.id,
            evaluation_id: procurement.evaluation_id,
            form_code: evaluation.map(|e| e.form_code.clone()),
            title: submission
                .map(Submission::display_title)
                .unwrap_or_else(|| UNTITLED.to_string()),
            stored_title: stored_title(submission),
            vendor: procurement.vendor.clone(),
            status: procurement.status.clone(),
            stage: stage_from_procurement_status(procurement.status.as_deref()),
            estimate_amount: procurement.estimate_amount,
            offer_amount: procurement.offer_amount,
            realized_amount: procurement.realized_amount,
            start_date: procurement.start_date,
            completion_date: procurement.completion_date,
            handover_date: procurement.handover_date,
        }
    }
}

impl Listable for ProcurementRow {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "form_code" => FieldValue::text(self.form_code.as_deref()),
            "title" => FieldValue::text(self.stored_title.as_deref()),
            "vendor" => FieldValue::text(self.vendor.as_deref()),
            "status" => FieldValue::text(self.status.as_deref()),
            "stage" => FieldValue::text(Some(self.stage.as_str())),
            "estimate_amount" => amount(self.estimate_amount),
            "offer_amount" => amount(self.offer_amount),
            "realized_amount" => amount(self.realized_amount),
            "start_date" => date(self.start_date),
            "completion_date" => date(self.completion_date),
            _ => FieldValue::Text(None),
        }
    }
}
