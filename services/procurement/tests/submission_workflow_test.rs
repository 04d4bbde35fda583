//! 申请审批流程测试

mod common;

use common::{Harness, date};
use procura_adapter_memory::StoreOperation;
use procura_errors::AppError;
use procurement::application::{ApproveSubmissionCommand, RejectSubmissionCommand};
use procurement::domain::evaluation::FormCode;
use procurement::domain::submission::{SubmissionRepository, SubmissionStatus};
use procurement::infrastructure::persistence::tables::{EVALUATIONS, SUBMISSIONS};

fn approve(id: &str) -> ApproveSubmissionCommand {
    ApproveSubmissionCommand {
        submission_id: id.to_string(),
        reviewed_by: Some("kabag.umum".to_string()),
    }
}

#[tokio::test]
async fn test_approve_creates_draft_evaluation_with_form_code() {
    let h = Harness::new(date(2025, 5, 14));
    let submission = h.submit("Pengadaan Laptop", "TI", 50_000_000).await;
    assert_eq!(submission.lifecycle(), Some(SubmissionStatus::Pending));

    let outcome = h
        .submission_handler()
        .handle_approve(approve(&submission.id.to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.submission.status.as_deref(), Some("approved"));
    assert_eq!(outcome.submission.reviewed_by.as_deref(), Some("kabag.umum"));
    assert!(!outcome.evaluation.is_final);
    assert_eq!(outcome.evaluation.submission_id, submission.id);
    assert_eq!(outcome.evaluation.form_code, "0001/FORM-EV/PENG/MEI/2025");
    assert!(outcome.evaluation.parsed_form_code().is_some());
}

#[tokio::test]
async fn test_form_code_sequence_increments_within_month() {
    let h = Harness::new(date(2025, 8, 2));
    let (_, first) = h.submit_and_approve("Kertas A4", 1_500_000).await;
    let (_, second) = h.submit_and_approve("Tinta Printer", 2_000_000).await;

    let codes: Vec<String> = h
        .raw
        .rows(EVALUATIONS)
        .await
        .iter()
        .filter_map(|r| r["form_code"].as_str().map(str::to_string))
        .collect();
    assert_eq!(codes.len(), 2);
    assert!(codes.contains(&"0001/FORM-EV/PENG/AGU/2025".to_string()));
    assert!(codes.contains(&"0002/FORM-EV/PENG/AGU/2025".to_string()));
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_form_code_ignores_other_months_and_malformed_codes() {
    let h = Harness::new(date(2025, 9, 1));
    h.raw
        .seed(
            EVALUATIONS,
            vec![
                serde_json::json!({
                    "id": procura_common::RecordId::new(),
                    "submission_id": procura_common::RecordId::new(),
                    "form_code": "0041/FORM-EV/PENG/AGU/2025",
                    "is_final": true
                }),
                serde_json::json!({
                    "id": procura_common::RecordId::new(),
                    "submission_id": procura_common::RecordId::new(),
                    "form_code": "FORM LAMA 7",
                    "is_final": false
                }),
            ]
            .into_iter()
            .filter_map(|v| v.as_object().cloned())
            .collect(),
        )
        .await;

    let submission = h.submit("Meja Rapat", "Umum", 9_000_000).await;
    let outcome = h
        .submission_handler()
        .handle_approve(approve(&submission.id.to_string()))
        .await
        .unwrap();

    let code: FormCode = outcome.evaluation.form_code.parse().unwrap();
    assert_eq!((code.sequence, code.month, code.year), (1, 9, 2025));
}

#[tokio::test]
async fn test_approve_twice_is_conflict() {
    let h = Harness::new(date(2025, 5, 14));
    let (submission_id, _) = h.submit_and_approve("Proyektor", 12_000_000).await;

    let again = h.submission_handler().handle_approve(approve(&submission_id)).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));
    assert_eq!(h.raw.rows(EVALUATIONS).await.len(), 1);
}

#[tokio::test]
async fn test_approve_unknown_submission() {
    let h = Harness::new(date(2025, 5, 14));
    let result = h
        .submission_handler()
        .handle_approve(approve(&procura_common::RecordId::new().to_string()))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let malformed = h.submission_handler().handle_approve(approve("12")).await;
    assert!(matches!(malformed, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_failed_review_write_removes_draft_evaluation() {
    let h = Harness::new(date(2025, 5, 14));
    let submission = h.submit("Kursi Kerja", "Umum", 7_500_000).await;
    h.raw.fail_next(StoreOperation::Update, SUBMISSIONS).await;

    let result = h
        .submission_handler()
        .handle_approve(approve(&submission.id.to_string()))
        .await;

    assert!(matches!(result, Err(AppError::Store(_))));
    assert!(h.raw.rows(EVALUATIONS).await.is_empty());

    let stored = h.submissions.find_by_id(&submission.id).await.unwrap().unwrap();
    assert_eq!(stored.lifecycle(), Some(SubmissionStatus::Pending));
}

#[tokio::test]
async fn test_failed_cleanup_still_returns_original_error() {
    let h = Harness::new(date(2025, 5, 14));
    let submission = h.submit("Server Rack", "TI", 80_000_000).await;
    h.raw.fail_next(StoreOperation::Update, SUBMISSIONS).await;
    h.raw.fail_next(StoreOperation::Delete, EVALUATIONS).await;

    let result = h
        .submission_handler()
        .handle_approve(approve(&submission.id.to_string()))
        .await;

    match result {
        Err(AppError::Store(msg)) => assert!(msg.contains(SUBMISSIONS), "{msg}"),
        other => panic!("unexpected result: {:?}", other.map(|o| o.evaluation.form_code)),
    }
    // 清理失败时草稿评估表仍留在表中
    assert_eq!(h.raw.rows(EVALUATIONS).await.len(), 1);
}

#[tokio::test]
async fn test_reject_requires_reason() {
    let h = Harness::new(date(2025, 5, 14));
    let submission = h.submit("Mobil Dinas", "Umum", 450_000_000).await;

    let blank = h
        .submission_handler()
        .handle_reject(RejectSubmissionCommand {
            submission_id: submission.id.to_string(),
            reason: "   ".to_string(),
            reviewed_by: None,
        })
        .await;
    assert!(matches!(blank, Err(AppError::Validation(_))));

    let rejected = h
        .submission_handler()
        .handle_reject(RejectSubmissionCommand {
            submission_id: submission.id.to_string(),
            reason: "Anggaran tidak tersedia".to_string(),
            reviewed_by: Some("kabag.umum".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(rejected.lifecycle(), Some(SubmissionStatus::Rejected));
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("Anggaran tidak tersedia")
    );
    assert!(h.raw.rows(EVALUATIONS).await.is_empty());

    let approve_after = h
        .submission_handler()
        .handle_approve(approve(&submission.id.to_string()))
        .await;
    assert!(matches!(approve_after, Err(AppError::Conflict(_))));
}
