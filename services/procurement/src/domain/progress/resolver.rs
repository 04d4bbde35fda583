//! 进度推导
//!
//! 优先级：采购执行 → 评估表 → 申请状态，首个命中即返回。
//! 任何输入（包括空状态、未知文本）都有结果，不会出错。

use crate::domain::evaluation::Evaluation;
use crate::domain::procurement::Procurement;
use crate::domain::submission::{Submission, SubmissionStatus};

use super::stage::{Progress, Stage};

const DONE_TOKENS: &[&str] = &["selesai", "done", "completed", "lunas", "dibayar", "paid"];
const WAITING_TOKENS: &[&str] = &["menunggu", "waiting"];
const DELIVERY_TOKENS: &[&str] = &["pengiriman", "delivery", "dikirim"];
const PO_TOKENS: &[&str] = &["po", "issue", "terbit"];

/// 采购执行状态文本对应的阶段（大小写不敏感的子串匹配）
pub fn stage_from_procurement_status(status: Option<&str>) -> Stage {
    let text = status.unwrap_or_default().to_lowercase();
    let table: [(&[&str], Stage); 4] = [
        (DONE_TOKENS, Stage::Payment),
        (DELIVERY_TOKENS, Stage::Procurement),
        (PO_TOKENS, Stage::Procurement),
        (WAITING_TOKENS, Stage::EvaluationDocuments),
    ];

    table
        .iter()
        .find(|(tokens, _)| tokens.iter().any(|t| text.contains(t)))
        .map(|(_, stage)| *stage)
        .unwrap_or(Stage::Procurement)
}

/// 进度推导器
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressResolver;

impl ProgressResolver {
    pub fn resolve(
        submission: &Submission,
        evaluation: Option<&Evaluation>,
        procurement: Option<&Procurement>,
    ) -> Progress {
        if let Some(procurement) = procurement {
            return Progress::at(stage_from_procurement_status(procurement.status.as_deref()));
        }

        if let Some(evaluation) = evaluation {
            return Progress::at(if evaluation.is_final {
                Stage::EvaluationDocuments
            } else {
                Stage::EvaluationForm
            });
        }

        match submission.lifecycle() {
            Some(SubmissionStatus::Rejected) => Progress::rejected_at(Stage::Submission),
            Some(SubmissionStatus::Completed) => Progress::at(Stage::Payment),
            Some(SubmissionStatus::InProgress) => Progress::at(Stage::EvaluationForm),
            Some(SubmissionStatus::Approved) => Progress::at(Stage::Approval),
            Some(SubmissionStatus::Pending) | None => Progress::at(Stage::Submission),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procura_common::RecordId;
    use serde_json::json;

    fn submission(status: Option<&str>) -> Submission {
        serde_json::from_value(json!({ "id": RecordId::new(), "status": status })).unwrap()
    }

    fn evaluation(is_final: bool) -> Evaluation {
        serde_json::from_value(json!({
            "id": RecordId::new(),
            "submission_id": RecordId::new(),
            "form_code": "0001/FORM-EV/PENG/JAN/2025",
            "is_final": is_final
        }))
        .unwrap()
    }

    fn procurement(status: Option<&str>) -> Procurement {
        serde_json::from_value(json!({ "id": RecordId::new(), "status": status })).unwrap()
    }

    #[test]
    fn test_procurement_status_tokens() {
        let cases = [
            (Some("Selesai"), Stage::Payment),
            (Some("COMPLETED"), Stage::Payment),
            (Some("sudah dibayar"), Stage::Payment),
            (Some("Menunggu dokumen"), Stage::EvaluationDocuments),
            (Some("Dalam Pengiriman"), Stage::Procurement),
            (Some("PO Terbit"), Stage::Procurement),
            (Some("???"), Stage::Procurement),
            (Some(""), Stage::Procurement),
            (None, Stage::Procurement),
        ];
        for (status, expected) in cases {
            assert_eq!(stage_from_procurement_status(status), expected, "{status:?}");
        }
    }

    #[test]
    fn test_done_checked_before_waiting() {
        assert_eq!(
            stage_from_procurement_status(Some("menunggu -> selesai")),
            Stage::Payment
        );
    }

    #[test]
    fn test_delivery_and_po_checked_before_waiting() {
        assert_eq!(
            stage_from_procurement_status(Some("Menunggu Pengiriman")),
            Stage::Procurement
        );
        assert_eq!(
            stage_from_procurement_status(Some("PO menunggu tanda tangan")),
            Stage::Procurement
        );
        assert_eq!(
            stage_from_procurement_status(Some("Menunggu kelengkapan berkas")),
            Stage::EvaluationDocuments
        );
    }

    #[test]
    fn test_procurement_takes_priority() {
        let progress = ProgressResolver::resolve(
            &submission(Some("ditolak")),
            Some(&evaluation(false)),
            Some(&procurement(Some("completed"))),
        );
        assert_eq!(progress, Progress::at(Stage::Payment));
    }

    #[test]
    fn test_evaluation_finality() {
        let s = submission(Some("approved"));
        assert_eq!(
            ProgressResolver::resolve(&s, Some(&evaluation(false)), None).stage,
            Stage::EvaluationForm
        );
        assert_eq!(
            ProgressResolver::resolve(&s, Some(&evaluation(true)), None).stage,
            Stage::EvaluationDocuments
        );
    }

    #[test]
    fn test_rejected_submission() {
        let progress = ProgressResolver::resolve(&submission(Some("ditolak")), None, None);
        assert_eq!(progress, Progress::rejected_at(Stage::Submission));
    }

    #[test]
    fn test_submission_status_synonyms() {
        let cases = [
            (Some("Disetujui"), Stage::Approval),
            (Some("approved"), Stage::Approval),
            (Some("Sedang Diproses"), Stage::EvaluationForm),
            (Some("done"), Stage::Payment),
            (Some("pending"), Stage::Submission),
            (Some("entah"), Stage::Submission),
            (Some(""), Stage::Submission),
            (None, Stage::Submission),
        ];
        for (status, expected) in cases {
            let progress = ProgressResolver::resolve(&submission(status), None, None);
            assert_eq!(progress.stage, expected, "{status:?}");
            assert!(!progress.rejected);
        }
    }

    #[test]
    fn test_resolver_is_total() {
        let statuses = [
            None,
            Some(""),
            Some("   "),
            Some("ditolak"),
            Some("tidak disetujui"),
            Some("🙂"),
            Some("PENDING"),
        ];
        for submission_status in statuses {
            for eval in [None, Some(evaluation(false)), Some(evaluation(true))] {
                for proc_status in statuses {
                    let proc = procurement(proc_status);
                    for with_proc in [false, true] {
                        let progress = ProgressResolver::resolve(
                            &submission(submission_status),
                            eval.as_ref(),
                            with_proc.then_some(&proc),
                        );
                        assert!(Stage::ALL.contains(&progress.stage));
                        if progress.rejected {
                            assert_eq!(progress.stage, Stage::Submission);
                        }
                    }
                }
            }
        }
    }
}
