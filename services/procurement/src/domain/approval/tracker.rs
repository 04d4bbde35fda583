//! 会签进度
//!
//! 一个角色"已签"当且仅当其日期非空；第一个角色总是解锁，
//! 其他角色在前一角色已签后解锁。已签的角色仍可修改日期。

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::record::ApprovalRecord;
use super::role::{APPROVAL_SEQUENCE, ApprovalRole};

/// 单个角色的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleState {
    pub role: ApprovalRole,
    pub date: Option<NaiveDate>,
    pub done: bool,
    pub unlocked: bool,
    pub editable: bool,
    /// 第一个未签且已解锁的角色
    pub current: bool,
}

/// 整体会签进度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApprovalProgress {
    InProgress,
    Finished,
}

impl ApprovalProgress {
    /// 看板使用的状态代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InProgress => "proses",
            Self::Finished => "selesai",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "proses" | "in_progress" => Some(Self::InProgress),
            "selesai" | "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApprovalError {
    #[error("{role} is locked until {waiting_for} has signed")]
    RoleLocked {
        role: ApprovalRole,
        waiting_for: ApprovalRole,
    },
}

/// 一次日期写入计划
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateChange {
    pub role: ApprovalRole,
    pub date: NaiveDate,
    /// 请求的日期晚于今天而被截断
    pub clamped: bool,
}

impl ApprovalRecord {
    pub fn is_done(&self, role: ApprovalRole) -> bool {
        self.date(role).is_some()
    }

    pub fn is_unlocked(&self, role: ApprovalRole) -> bool {
        role.previous().is_none_or(|prev| self.is_done(prev))
    }

    pub fn is_editable(&self, role: ApprovalRole) -> bool {
        self.is_unlocked(role) || self.is_done(role)
    }

    /// 按签署顺序列出每个角色的状态
    pub fn role_states(&self) -> Vec<RoleState> {
        let current = self.current_role();
        APPROVAL_SEQUENCE
            .iter()
            .map(|&role| RoleState {
                role,
                date: self.date(role),
                done: self.is_done(role),
                unlocked: self.is_unlocked(role),
                editable: self.is_editable(role),
                current: current == Some(role),
            })
            .collect()
    }

    /// 当前待签角色（全部签完时为 None）
    pub fn current_role(&self) -> Option<ApprovalRole> {
        APPROVAL_SEQUENCE
            .iter()
            .copied()
            .find(|&role| !self.is_done(role) && self.is_unlocked(role))
    }

    /// 已签角色数
    pub fn signed_count(&self) -> usize {
        APPROVAL_SEQUENCE.iter().filter(|&&r| self.is_done(r)).count()
    }

    pub fn is_finished(&self) -> bool {
        APPROVAL_SEQUENCE.iter().all(|&r| self.is_done(r))
    }

    pub fn progress(&self) -> ApprovalProgress {
        if self.is_finished() {
            ApprovalProgress::Finished
        } else {
            ApprovalProgress::InProgress
        }
    }

    /// 校验并规划一次日期写入：锁定的角色拒绝，未来日期截断为今天
    pub fn plan_date_change(
        &self,
        role: ApprovalRole,
        requested: NaiveDate,
        today: NaiveDate,
    ) -> Result<DateChange, ApprovalError> {
        if !self.is_editable(role) {
            return Err(ApprovalError::RoleLocked {
                role,
                waiting_for: role.previous().unwrap_or(role),
            });
        }

        let clamped = requested > today;
        Ok(DateChange {
            role,
            date: if clamped { today } else { requested },
            clamped,
        })
    }
}
