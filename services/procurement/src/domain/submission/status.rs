//! 申请状态
//!
//! 数据表中的状态是自由文本，历史数据混有英文与印尼语写法，这里做宽松归一

use serde::{Deserialize, Serialize};

/// 申请生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    InProgress,
    Completed,
}

const REJECTED_TOKENS: &[&str] = &[
    "ditolak", "tolak", "batal", "reject", "rejected", "cancel", "cancelled",
];
const COMPLETED_TOKENS: &[&str] = &["selesai", "completed", "complete", "done"];
const IN_PROGRESS_TOKENS: &[&str] = &[
    "diproses", "proses", "in_progress", "in-progress", "in progress", "process",
];
const APPROVED_TOKENS: &[&str] = &["disetujui", "setuju", "approved", "approve", "diterima"];
const PENDING_TOKENS: &[&str] = &["pending", "menunggu", "diajukan", "baru"];
/// "menunggu persetujuan" / "belum disetujui" 表示仍在待审
const AWAITING_MARKERS: &[&str] = &["menunggu", "belum", "pending", "awaiting"];

impl SubmissionStatus {
    /// 写入数据表时使用的规范值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// 宽松解析：先精确匹配，再按子串匹配；无法识别时返回 None
    ///
    /// 匹配顺序固定为 拒绝 → 完成 → 处理中 → 通过 → 待审，
    /// 因为 "tidak disetujui" 这类文本同时包含多个词。
    pub fn parse_loose(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        let table: [(&[&str], Self); 5] = [
            (REJECTED_TOKENS, Self::Rejected),
            (COMPLETED_TOKENS, Self::Completed),
            (IN_PROGRESS_TOKENS, Self::InProgress),
            (APPROVED_TOKENS, Self::Approved),
            (PENDING_TOKENS, Self::Pending),
        ];

        if let Some((_, status)) = table
            .iter()
            .find(|(tokens, _)| tokens.contains(&text.as_str()))
        {
            return Some(*status);
        }

        if text.contains("tidak") && text.contains("setuju") {
            return Some(Self::Rejected);
        }
        if AWAITING_MARKERS.iter().any(|m| text.contains(m))
            && (text.contains("setuju") || text.contains("approv"))
        {
            return Some(Self::Pending);
        }

        table
            .iter()
            .find(|(tokens, _)| tokens.iter().any(|t| text.contains(t)))
            .map(|(_, status)| *status)
    }

    /// 是否已经过审核（通过或拒绝之后的状态）
    pub fn is_reviewed(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tokens() {
        assert_eq!(SubmissionStatus::parse_loose("pending"), Some(SubmissionStatus::Pending));
        assert_eq!(SubmissionStatus::parse_loose("Disetujui"), Some(SubmissionStatus::Approved));
        assert_eq!(SubmissionStatus::parse_loose("DITOLAK"), Some(SubmissionStatus::Rejected));
        assert_eq!(SubmissionStatus::parse_loose("in_progress"), Some(SubmissionStatus::InProgress));
        assert_eq!(SubmissionStatus::parse_loose("selesai"), Some(SubmissionStatus::Completed));
    }

    #[test]
    fn test_substring_tokens() {
        assert_eq!(
            SubmissionStatus::parse_loose("Pengajuan dibatalkan"),
            Some(SubmissionStatus::Rejected)
        );
        assert_eq!(
            SubmissionStatus::parse_loose("sudah disetujui kabag"),
            Some(SubmissionStatus::Approved)
        );
        assert_eq!(
            SubmissionStatus::parse_loose("tidak disetujui"),
            Some(SubmissionStatus::Rejected)
        );
    }

    #[test]
    fn test_awaiting_approval_phrases_are_pending() {
        for raw in ["Menunggu Persetujuan", "belum disetujui", "Awaiting approval"] {
            assert_eq!(
                SubmissionStatus::parse_loose(raw),
                Some(SubmissionStatus::Pending),
                "{raw}"
            );
        }
        assert_eq!(
            SubmissionStatus::parse_loose("tidak disetujui"),
            Some(SubmissionStatus::Rejected)
        );
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(SubmissionStatus::parse_loose(""), None);
        assert_eq!(SubmissionStatus::parse_loose("   "), None);
        assert_eq!(SubmissionStatus::parse_loose("xyz"), None);
    }

    #[test]
    fn test_canonical_roundtrip() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
            SubmissionStatus::InProgress,
            SubmissionStatus::Completed,
        ] {
            assert_eq!(SubmissionStatus::parse_loose(status.as_str()), Some(status));
        }
    }
}
