//! 会签角色
//!
//! 角色顺序只在这里定义，看板、编辑与打印共用

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 会签角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalRole {
    CorporateSecretary,
    OperationsSevp,
    Finance,
    BusinessSupportSevp,
    Director,
}

/// 固定签署顺序
pub const APPROVAL_SEQUENCE: [ApprovalRole; 5] = [
    ApprovalRole::CorporateSecretary,
    ApprovalRole::OperationsSevp,
    ApprovalRole::Finance,
    ApprovalRole::BusinessSupportSevp,
    ApprovalRole::Director,
];

impl ApprovalRole {
    /// 在签署顺序中的位置
    pub fn index(&self) -> usize {
        match self {
            Self::CorporateSecretary => 0,
            Self::OperationsSevp => 1,
            Self::Finance => 2,
            Self::BusinessSupportSevp => 3,
            Self::Director => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        APPROVAL_SEQUENCE.get(index).copied()
    }

    /// 上一个角色（第一个角色没有）
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// form_approval 表中的日期列
    pub fn column(&self) -> &'static str {
        match self {
            Self::CorporateSecretary => "sekper_date",
            Self::OperationsSevp => "sevp_operation_date",
            Self::Finance => "finance_date",
            Self::BusinessSupportSevp => "sevp_business_support_date",
            Self::Director => "director_date",
        }
    }

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::CorporateSecretary => "Corporate Secretary",
            Self::OperationsSevp => "Operations SEVP",
            Self::Finance => "Finance",
            Self::BusinessSupportSevp => "Business-Support SEVP",
            Self::Director => "Director",
        }
    }

    /// 按列名查找角色
    pub fn from_column(column: &str) -> Option<Self> {
        APPROVAL_SEQUENCE.iter().copied().find(|r| r.column() == column)
    }
}

impl fmt::Display for ApprovalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApprovalRole {
    type Err = String;

    /// 接受列名、snake_case 名称或常用简称
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Some(role) = Self::from_column(&key) {
            return Ok(role);
        }
        match key.as_str() {
            "corporate_secretary" | "sekper" => Ok(Self::CorporateSecretary),
            "operations_sevp" | "sevp_operation" | "sevp_operasional" => Ok(Self::OperationsSevp),
            "finance" | "keuangan" => Ok(Self::Finance),
            "business_support_sevp" | "sevp_business_support" | "sevp_bisnis" => {
                Ok(Self::BusinessSupportSevp)
            }
            "director" | "direktur" => Ok(Self::Director),
            _ => Err(format!("unknown approval role: {}", s)),
        }
    }
}
