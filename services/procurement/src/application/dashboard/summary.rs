//! 状态汇总

use serde::Serialize;

use crate::domain::approval::ApprovalProgress;
use crate::domain::progress::Stage;

use super::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: Stage,
    pub count: usize,
}

/// 看板顶部的汇总数字
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total_submissions: usize,
    pub awaiting_review: usize,
    pub rejected: usize,
    /// 按阶段计数，顺序与 `Stage::ALL` 一致
    pub by_stage: Vec<StageCount>,
    pub draft_evaluations: usize,
    pub final_evaluations: usize,
    pub approvals_finished: usize,
    pub approvals_in_progress: usize,
    /// 尚未关联评估表的历史采购记录
    pub unlinked_procurements: usize,
}

impl StatusSummary {
    pub fn compute(snapshot: &Snapshot) -> Self {
        let joined = snapshot.join();
        let mut by_stage: Vec<StageCount> = Stage::ALL
            .iter()
            .map(|&stage| StageCount { stage, count: 0 })
            .collect();
        let mut rejected = 0;

        for submission in &snapshot.submissions {
            let progress = joined.progress_of(submission);
            by_stage[progress.stage.index()].count += 1;
            if progress.rejected {
                rejected += 1;
            }
        }

        let finished = snapshot
            .evaluations
            .iter()
            .filter(|e| {
                joined
                    .approval_for(&e.id)
                    .is_some_and(|a| a.progress() == ApprovalProgress::Finished)
            })
            .count();
        let final_evaluations = snapshot.evaluations.iter().filter(|e| e.is_final).count();

        Self {
            total_submissions: snapshot.submissions.len(),
            awaiting_review: snapshot
                .submissions
                .iter()
                .filter(|s| s.is_awaiting_review())
                .count(),
            rejected,
            by_stage,
            draft_evaluations: snapshot.evaluations.len() - final_evaluations,
            final_evaluations,
            approvals_finished: finished,
            approvals_in_progress: snapshot.evaluations.len() - finished,
            unlinked_procurements: snapshot
                .procurements
                .iter()
                .filter(|p| !p.is_linked())
                .count(),
        }
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.by_stage[stage.index()].count
    }
}
