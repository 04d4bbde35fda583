//! 数据快照与关联

use std::collections::HashMap;

use procura_common::RecordId;

use crate::domain::approval::ApprovalRecord;
use crate::domain::evaluation::Evaluation;
use crate::domain::procurement::Procurement;
use crate::domain::progress::{Progress, ProgressResolver};
use crate::domain::submission::Submission;

/// 四张表的快照
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub submissions: Vec<Submission>,
    pub evaluations: Vec<Evaluation>,
    pub approvals: Vec<ApprovalRecord>,
    pub procurements: Vec<Procurement>,
}

/// 快照上的关联索引
pub struct Joined<'a> {
    pub snapshot: &'a Snapshot,
    submission_by_id: HashMap<RecordId, &'a Submission>,
    evaluation_by_id: HashMap<RecordId, &'a Evaluation>,
    evaluation_by_submission: HashMap<RecordId, &'a Evaluation>,
    approval_by_evaluation: HashMap<RecordId, &'a ApprovalRecord>,
    procurement_by_evaluation: HashMap<RecordId, &'a Procurement>,
}

impl Snapshot {
    pub fn join(&self) -> Joined<'_> {
        Joined {
            snapshot: self,
            submission_by_id: self.submissions.iter().map(|s| (s.id, s)).collect(),
            evaluation_by_id: self.evaluations.iter().map(|e| (e.id, e)).collect(),
            evaluation_by_submission: self
                .evaluations
                .iter()
                .map(|e| (e.submission_id, e))
                .collect(),
            approval_by_evaluation: self
                .approvals
                .iter()
                .map(|a| (a.evaluation_id, a))
                .collect(),
            procurement_by_evaluation: self
                .procurements
                .iter()
                .filter_map(|p| p.evaluation_id.map(|id| (id, p)))
                .collect(),
        }
    }
}

impl<'a> Joined<'a> {
    pub fn submission(&self, id: &RecordId) -> Option<&'a Submission> {
        self.submission_by_id.get(id).copied()
    }

    pub fn evaluation(&self, id: &RecordId) -> Option<&'a Evaluation> {
        self.evaluation_by_id.get(id).copied()
    }

    pub fn evaluation_for(&self, submission_id: &RecordId) -> Option<&'a Evaluation> {
        self.evaluation_by_submission.get(submission_id).copied()
    }

    pub fn approval_for(&self, evaluation_id: &RecordId) -> Option<&'a ApprovalRecord> {
        self.approval_by_evaluation.get(evaluation_id).copied()
    }

    pub fn procurement_for(&self, evaluation_id: &RecordId) -> Option<&'a Procurement> {
        self.procurement_by_evaluation.get(evaluation_id).copied()
    }

    /// 申请的当前进度
    pub fn progress_of(&self, submission: &Submission) -> Progress {
        let evaluation = self.evaluation_for(&submission.id);
        let procurement = evaluation.and_then(|e| self.procurement_for(&e.id));
        ProgressResolver::resolve(submission, evaluation, procurement)
    }
}
