//! 评估表实体

use chrono::{DateTime, Utc};
use procura_common::RecordId;
use procura_domain_core::{Entity, Rupiah};
use serde::{Deserialize, Serialize};

use super::form_code::FormCode;

/// 评估表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: RecordId,
    #[serde(default)]
    pub form_code: String,
    pub submission_id: RecordId,
    #[serde(default)]
    pub budget_name: Option<String>,
    #[serde(default)]
    pub budget_code: Option<String>,
    #[serde(default)]
    pub evaluated_amount: Option<Rupiah>,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Evaluation {
    /// 解析后的编号（历史数据可能无法解析）
    pub fn parsed_form_code(&self) -> Option<FormCode> {
        self.form_code.parse().ok()
    }

    /// 定稿所需字段是否齐全
    pub fn missing_final_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.budget_name.as_deref().is_none_or(|v| v.trim().is_empty()) {
            missing.push("budget_name");
        }
        if self.budget_code.as_deref().is_none_or(|v| v.trim().is_empty()) {
            missing.push("budget_code");
        }
        if self.evaluated_amount.is_none() {
            missing.push("evaluated_amount");
        }
        missing
    }
}

impl Entity for Evaluation {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// 审批通过时自动创建的评估表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvaluation {
    pub form_code: String,
    pub submission_id: RecordId,
    pub is_final: bool,
}

impl NewEvaluation {
    pub fn draft(form_code: FormCode, submission_id: RecordId) -> Self {
        Self {
            form_code: form_code.to_string(),
            submission_id,
            is_final: false,
        }
    }
}

/// 评估人填写的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_amount: Option<Rupiah>,
}

impl EvaluationInput {
    pub fn is_empty(&self) -> bool {
        self.budget_name.is_none() && self.budget_code.is_none() && self.evaluated_amount.is_none()
    }
}
