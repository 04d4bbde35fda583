//! 采购执行命令定义

use chrono::NaiveDate;
use procura_common::RecordId;
use procura_domain_core::Rupiah;

use crate::domain::procurement::{NewProcurement, ProcurementUpdate};

/// 为已定稿的评估表登记采购执行
#[derive(Debug, Clone, Default)]
pub struct CreateProcurementCommand {
    pub evaluation_id: String,
    pub vendor: Option<String>,
    pub estimate_amount: Option<i64>,
    pub offer_amount: Option<i64>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl CreateProcurementCommand {
    pub fn into_new_procurement(self, evaluation_id: RecordId) -> Result<NewProcurement, String> {
        Ok(NewProcurement {
            evaluation_id,
            vendor: self.vendor.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()),
            estimate_amount: amount(self.estimate_amount, "estimate_amount")?,
            offer_amount: amount(self.offer_amount, "offer_amount")?,
            status: self.status,
            start_date: self.start_date,
        })
    }
}

/// 更新采购执行，`None` 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UpdateProcurementCommand {
    pub procurement_id: String,
    pub vendor: Option<String>,
    pub estimate_amount: Option<i64>,
    pub offer_amount: Option<i64>,
    pub realized_amount: Option<i64>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub handover_date: Option<NaiveDate>,
}

impl UpdateProcurementCommand {
    pub fn into_update(self) -> Result<ProcurementUpdate, String> {
        if let (Some(start), Some(done)) = (self.start_date, self.completion_date)
            && done < start
        {
            return Err("Completion date cannot precede start date".to_string());
        }

        Ok(ProcurementUpdate {
            vendor: self.vendor,
            estimate_amount: amount(self.estimate_amount, "estimate_amount")?,
            offer_amount: amount(self.offer_amount, "offer_amount")?,
            realized_amount: amount(self.realized_amount, "realized_amount")?,
            status: self.status,
            start_date: self.start_date,
            completion_date: self.completion_date,
            handover_date: self.handover_date,
        })
    }
}

/// 历史数据迁移：为缺少 evaluation_id 的记录补全关联
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkLegacyProcurementsCommand {
    /// 只计算结果，不写入
    pub dry_run: bool,
}

fn amount(value: Option<i64>, field: &str) -> Result<Option<Rupiah>, String> {
    value
        .map(Rupiah::new)
        .transpose()
        .map_err(|e| format!("{}: {}", field, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_rejected() {
        let cmd = CreateProcurementCommand {
            offer_amount: Some(-1),
            ..Default::default()
        };
        let err = cmd.into_new_procurement(RecordId::new()).unwrap_err();
        assert!(err.starts_with("offer_amount"));
    }

    #[test]
    fn test_completion_before_start_rejected() {
        let cmd = UpdateProcurementCommand {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            completion_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..Default::default()
        };
        assert!(cmd.into_update().is_err());
    }

    #[test]
    fn test_empty_update() {
        let update = UpdateProcurementCommand::default().into_update().unwrap();
        assert!(update.is_empty());
    }
}
