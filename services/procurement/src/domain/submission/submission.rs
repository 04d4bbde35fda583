//! 采购申请实体

use chrono::{DateTime, NaiveDate, Utc};
use procura_common::RecordId;
use procura_domain_core::{Entity, Rupiah};
use serde::{Deserialize, Serialize};

use super::status::SubmissionStatus;

/// 标题缺失时的展示文本
pub const UNTITLED: &str = "Tanpa Judul";

/// 申请类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Category {
    Goods,
    Services,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goods => "barang",
            Self::Services => "jasa",
            Self::Other => "lainnya",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "barang" | "goods" => Self::Goods,
            "jasa" | "services" | "service" => Self::Services,
            _ => Self::Other,
        }
    }
}

impl From<Option<String>> for Category {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

/// 采购申请
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub letter_number: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub amount: Option<Rupiah>,
    #[serde(default)]
    pub submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
    /// 原始状态文本
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

impl Submission {
    /// 归一后的生命周期状态
    pub fn lifecycle(&self) -> Option<SubmissionStatus> {
        self.status.as_deref().and_then(SubmissionStatus::parse_loose)
    }

    /// 标题（缺失时为 "Tanpa Judul"）
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => UNTITLED.to_string(),
        }
    }

    /// 是否仍可审批
    pub fn is_awaiting_review(&self) -> bool {
        matches!(self.lifecycle(), None | Some(SubmissionStatus::Pending))
    }
}

impl Entity for Submission {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// 新建申请（id 与 created_at 由数据存储生成）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSubmission {
    pub title: Option<String>,
    pub letter_number: Option<String>,
    pub unit: Option<String>,
    pub category: Category,
    pub amount: Rupiah,
    pub submission_date: NaiveDate,
    pub note: Option<String>,
    pub attachment_url: Option<String>,
    pub status: String,
}

/// 审批结果写入的字段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReview {
    pub status: String,
    pub reviewed_at: DateTime<Utc>,
    pub reviewed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl SubmissionReview {
    pub fn approved(reviewed_by: Option<String>, at: DateTime<Utc>) -> Self {
        Self {
            status: SubmissionStatus::Approved.as_str().to_string(),
            reviewed_at: at,
            reviewed_by,
            rejection_reason: None,
        }
    }

    pub fn rejected(reason: String, reviewed_by: Option<String>, at: DateTime<Utc>) -> Self {
        Self {
            status: SubmissionStatus::Rejected.as_str().to_string(),
            reviewed_at: at,
            reviewed_by,
            rejection_reason: Some(reason),
        }
    }
}
