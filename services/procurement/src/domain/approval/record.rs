//! 会签记录

use chrono::NaiveDate;
use procura_common::RecordId;
use serde::{Deserialize, Serialize};

use super::role::{APPROVAL_SEQUENCE, ApprovalRole};

/// 会签记录，每张评估表一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub evaluation_id: RecordId,
    #[serde(default)]
    pub sekper_date: Option<NaiveDate>,
    #[serde(default)]
    pub sevp_operation_date: Option<NaiveDate>,
    #[serde(default)]
    pub finance_date: Option<NaiveDate>,
    #[serde(default)]
    pub sevp_business_support_date: Option<NaiveDate>,
    #[serde(default)]
    pub director_date: Option<NaiveDate>,
}

impl ApprovalRecord {
    /// 尚未有任何签署的记录
    pub fn empty(evaluation_id: RecordId) -> Self {
        Self {
            id: None,
            evaluation_id,
            sekper_date: None,
            sevp_operation_date: None,
            finance_date: None,
            sevp_business_support_date: None,
            director_date: None,
        }
    }

    pub fn date(&self, role: ApprovalRole) -> Option<NaiveDate> {
        match role {
            ApprovalRole::CorporateSecretary => self.sekper_date,
            ApprovalRole::OperationsSevp => self.sevp_operation_date,
            ApprovalRole::Finance => self.finance_date,
            ApprovalRole::BusinessSupportSevp => self.sevp_business_support_date,
            ApprovalRole::Director => self.director_date,
        }
    }

    pub fn set_date(&mut self, role: ApprovalRole, date: Option<NaiveDate>) {
        let slot = match role {
            ApprovalRole::CorporateSecretary => &mut self.sekper_date,
            ApprovalRole::OperationsSevp => &mut self.sevp_operation_date,
            ApprovalRole::Finance => &mut self.finance_date,
            ApprovalRole::BusinessSupportSevp => &mut self.sevp_business_support_date,
            ApprovalRole::Director => &mut self.director_date,
        };
        *slot = date;
    }

    /// 按签署顺序排列的日期
    pub fn dates(&self) -> [Option<NaiveDate>; 5] {
        APPROVAL_SEQUENCE.map(|role| self.date(role))
    }
}
