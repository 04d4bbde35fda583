//! 采购执行记录

use chrono::{DateTime, NaiveDate, Utc};
use procura_common::RecordId;
use procura_domain_core::{Entity, Rupiah};
use serde::{Deserialize, Serialize};

/// 采购执行记录
///
/// 通过 `evaluation_id` 关联评估表。`form_code`、`submission_id`、
/// `letter_number` 为历史行的冗余字段，只在一次性迁移时使用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procurement {
    pub id: RecordId,
    #[serde(default)]
    pub evaluation_id: Option<RecordId>,
    #[serde(default)]
    pub form_code: Option<String>,
    #[serde(default)]
    pub submission_id: Option<RecordId>,
    #[serde(default)]
    pub letter_number: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub estimate_amount: Option<Rupiah>,
    #[serde(default)]
    pub offer_amount: Option<Rupiah>,
    #[serde(default)]
    pub realized_amount: Option<Rupiah>,
    /// 自由文本状态
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub handover_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Procurement {
    pub fn is_linked(&self) -> bool {
        self.evaluation_id.is_some()
    }

    /// 报价与预算之差（任一缺失时为 None）
    pub fn savings(&self) -> Option<i64> {
        match (self.estimate_amount, self.offer_amount) {
            (Some(estimate), Some(offer)) => Some(estimate.difference(offer)),
            _ => None,
        }
    }

    /// 历史行的旧关联字段
    pub fn legacy_link(&self) -> LegacyLink<'_> {
        LegacyLink {
            form_code: non_blank(self.form_code.as_deref()),
            submission_id: self.submission_id.as_ref(),
            letter_number: non_blank(self.letter_number.as_deref()),
        }
    }
}

impl Entity for Procurement {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 旧关联字段，按 form_code、submission_id、letter_number 的顺序匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyLink<'a> {
    pub form_code: Option<&'a str>,
    pub submission_id: Option<&'a RecordId>,
    pub letter_number: Option<&'a str>,
}

impl LegacyLink<'_> {
    pub fn is_empty(&self) -> bool {
        self.form_code.is_none() && self.submission_id.is_none() && self.letter_number.is_none()
    }
}

/// 新建采购执行记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProcurement {
    pub evaluation_id: RecordId,
    pub vendor: Option<String>,
    pub estimate_amount: Option<Rupiah>,
    pub offer_amount: Option<Rupiah>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// 部分更新，只写出有值的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcurementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_amount: Option<Rupiah>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_amount: Option<Rupiah>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realized_amount: Option<Rupiah>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handover_date: Option<NaiveDate>,
}

impl ProcurementUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_row_without_evaluation_id() {
        let procurement: Procurement = serde_json::from_value(json!({
            "id": RecordId::new(),
            "form_code": "  ",
            "letter_number": "012/UM/2025",
            "status": "PO Terbit",
            "estimate_amount": "15000000",
            "offer_amount": 14000000
        }))
        .unwrap();

        assert!(!procurement.is_linked());
        let link = procurement.legacy_link();
        assert_eq!(link.form_code, None);
        assert_eq!(link.letter_number, Some("012/UM/2025"));
        assert!(!link.is_empty());
        assert_eq!(procurement.savings(), Some(1_000_000));
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = ProcurementUpdate {
            status: Some("Dalam Pengiriman".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "status": "Dalam Pengiriman" })
        );
        assert!(ProcurementUpdate::default().is_empty());
    }
}
