//! 进度阶段

use std::fmt;

use serde::{Deserialize, Serialize};

/// 进度阶段，按流程先后排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Submission,
    Approval,
    EvaluationForm,
    EvaluationDocuments,
    Procurement,
    Payment,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Submission,
        Stage::Approval,
        Stage::EvaluationForm,
        Stage::EvaluationDocuments,
        Stage::Procurement,
        Stage::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Approval => "approval",
            Self::EvaluationForm => "evaluation_form",
            Self::EvaluationDocuments => "evaluation_documents",
            Self::Procurement => "procurement",
            Self::Payment => "payment",
        }
    }

    /// 看板上的阶段名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submission => "Pengajuan",
            Self::Approval => "Persetujuan",
            Self::EvaluationForm => "Form Evaluasi",
            Self::EvaluationDocuments => "Dokumen Evaluasi",
            Self::Procurement => "Pengadaan",
            Self::Payment => "Pembayaran",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个阶段在进度条上的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Done,
    Current,
    Upcoming,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub stage: Stage,
    pub state: StageState,
}

/// 推导结果：当前阶段 + 是否已被拒绝
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Progress {
    pub stage: Stage,
    pub rejected: bool,
}

impl Progress {
    pub fn at(stage: Stage) -> Self {
        Self {
            stage,
            rejected: false,
        }
    }

    pub fn rejected_at(stage: Stage) -> Self {
        Self {
            stage,
            rejected: true,
        }
    }

    /// 进度条各阶段的状态
    ///
    /// 被拒绝的申请只展示到当前阶段为止
    pub fn stage_views(&self) -> Vec<StageView> {
        Stage::ALL
            .iter()
            .copied()
            .filter(|stage| !self.rejected || *stage <= self.stage)
            .map(|stage| StageView {
                stage,
                state: self.state_of(stage),
            })
            .collect()
    }

    pub fn state_of(&self, stage: Stage) -> StageState {
        match stage.cmp(&self.stage) {
            std::cmp::Ordering::Less => StageState::Done,
            std::cmp::Ordering::Equal if self.rejected => StageState::Rejected,
            std::cmp::Ordering::Equal => StageState::Current,
            std::cmp::Ordering::Greater => StageState::Upcoming,
        }
    }
}
