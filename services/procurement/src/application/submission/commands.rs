//! 采购申请命令定义

use chrono::NaiveDate;
use procura_domain_core::Rupiah;

use crate::domain::submission::{Category, NewSubmission, SubmissionStatus};

/// 提交申请命令
#[derive(Debug, Clone)]
pub struct CreateSubmissionCommand {
    pub title: String,
    pub letter_number: Option<String>,
    pub unit: Option<String>,
    pub category: String,
    pub amount: i64,
    /// 缺省时取当天
    pub submission_date: Option<NaiveDate>,
    pub note: Option<String>,
    pub attachment_url: Option<String>,
}

impl CreateSubmissionCommand {
    /// 验证命令参数
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if self.title.len() > 500 {
            return Err("Title cannot exceed 500 characters".to_string());
        }
        if self.amount < 0 {
            return Err("Amount cannot be negative".to_string());
        }
        if let Some(ref url) = self.attachment_url
            && !url.trim().is_empty()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err("Attachment must be an http(s) URL".to_string());
        }
        Ok(())
    }

    /// 转换为待写入的申请（状态固定为 pending）
    pub fn into_new_submission(self, today: NaiveDate) -> Result<NewSubmission, String> {
        let amount = Rupiah::new(self.amount).map_err(|e| e.to_string())?;
        Ok(NewSubmission {
            title: Some(self.title.trim().to_string()),
            letter_number: non_blank(self.letter_number),
            unit: non_blank(self.unit),
            category: Category::parse(&self.category),
            amount,
            submission_date: self.submission_date.unwrap_or(today),
            note: non_blank(self.note),
            attachment_url: non_blank(self.attachment_url),
            status: SubmissionStatus::Pending.as_str().to_string(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 审批通过命令
#[derive(Debug, Clone)]
pub struct ApproveSubmissionCommand {
    pub submission_id: String,
    pub reviewed_by: Option<String>,
}

/// 拒绝命令
#[derive(Debug, Clone)]
pub struct RejectSubmissionCommand {
    pub submission_id: String,
    pub reason: String,
    pub reviewed_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateSubmissionCommand {
        CreateSubmissionCommand {
            title: " Pengadaan Laptop ".to_string(),
            letter_number: Some("001/TI/2025".to_string()),
            unit: Some("TI".to_string()),
            category: "Barang".to_string(),
            amount: 50_000_000,
            submission_date: None,
            note: Some("   ".to_string()),
            attachment_url: None,
        }
    }

    #[test]
    fn test_validate() {
        assert!(command().validate().is_ok());

        let mut cmd = command();
        cmd.amount = -1;
        assert!(cmd.validate().is_err());

        let mut cmd = command();
        cmd.title = "  ".to_string();
        assert!(cmd.validate().is_err());

        let mut cmd = command();
        cmd.attachment_url = Some("ftp://files/a.pdf".to_string());
        assert!(cmd.validate().is_err());
    }

    #[test]
    fn test_into_new_submission_is_pending() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let new = command().into_new_submission(today).unwrap();
        assert_eq!(new.status, "pending");
        assert_eq!(new.title.as_deref(), Some("Pengadaan Laptop"));
        assert_eq!(new.category, Category::Goods);
        assert_eq!(new.submission_date, today);
        assert_eq!(new.note, None);
        assert_eq!(new.amount.amount(), 50_000_000);
    }
}
