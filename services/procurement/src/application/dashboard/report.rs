//! 会签单（打印视图）
//!
//! 角色顺序取自共享的签署顺序，与看板一致

use std::fmt;

use procura_common::{MISSING_PLACEHOLDER, display_or_dash, format_rupiah};
use serde::Serialize;

use crate::domain::approval::{ApprovalProgress, ApprovalRecord, RoleState};
use crate::domain::evaluation::Evaluation;
use crate::domain::submission::{Submission, UNTITLED};

/// 会签单的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalSheetRow {
    pub number: usize,
    pub role: &'static str,
    /// `dd/mm/yyyy` 或 `-`
    pub date: String,
    pub state: &'static str,
}

impl ApprovalSheetRow {
    fn from_state(number: usize, state: &RoleState) -> Self {
        Self {
            number,
            role: state.role.label(),
            date: state
                .date
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string()),
            state: if state.done {
                "Disetujui"
            } else if state.unlocked {
                "Menunggu"
            } else {
                "Terkunci"
            },
        }
    }
}

/// 会签单
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalSheet {
    pub form_code: String,
    pub title: String,
    pub letter_number: String,
    pub unit: String,
    pub category: &'static str,
    pub requested_amount: String,
    pub budget_name: String,
    pub budget_code: String,
    pub evaluated_amount: String,
    pub rows: Vec<ApprovalSheetRow>,
    pub progress: ApprovalProgress,
}

impl ApprovalSheet {
    pub fn build(
        evaluation: &Evaluation,
        submission: Option<&Submission>,
        record: Option<&ApprovalRecord>,
    ) -> Self {
        let record = record
            .cloned()
            .unwrap_or_else(|| ApprovalRecord::empty(evaluation.id));
        let rupiah = |amount: Option<procura_domain_core::Rupiah>| {
            amount
                .map(|a| format_rupiah(a.amount()))
                .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string())
        };

        Self {
            form_code: display_or_dash(Some(evaluation.form_code.as_str())),
            title: submission
                .map(Submission::display_title)
                .unwrap_or_else(|| UNTITLED.to_string()),
            letter_number: display_or_dash(submission.and_then(|s| s.letter_number.as_deref())),
            unit: display_or_dash(submission.and_then(|s| s.unit.as_deref())),
            category: submission.map(|s| s.category.as_str()).unwrap_or(MISSING_PLACEHOLDER),
            requested_amount: rupiah(submission.and_then(|s| s.amount)),
            budget_name: display_or_dash(evaluation.budget_name.as_deref()),
            budget_code: display_or_dash(evaluation.budget_code.as_deref()),
            evaluated_amount: rupiah(evaluation.evaluated_amount),
            rows: record
                .role_states()
                .iter()
                .enumerate()
                .map(|(i, state)| ApprovalSheetRow::from_state(i + 1, state))
                .collect(),
            progress: record.progress(),
        }
    }
}

impl fmt::Display for ApprovalSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LEMBAR PERSETUJUAN FORM EVALUASI")?;
        writeln!(f, "No. Form      : {}", self.form_code)?;
        writeln!(f, "Judul         : {}", self.title)?;
        writeln!(f, "No. Surat     : {}", self.letter_number)?;
        writeln!(f, "Unit          : {}", self.unit)?;
        writeln!(f, "Kategori      : {}", self.category)?;
        writeln!(f, "Nilai Ajuan   : {}", self.requested_amount)?;
        writeln!(f, "Mata Anggaran : {} ({})", self.budget_name, self.budget_code)?;
        writeln!(f, "Nilai Evaluasi: {}", self.evaluated_amount)?;
        writeln!(f)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>2}. {:<24} {:<10} {}",
                row.number, row.role, row.date, row.state
            )?;
        }
        write!(f, "Status: {}", self.progress.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use procura_common::RecordId;
    use serde_json::json;

    use crate::domain::approval::{APPROVAL_SEQUENCE, ApprovalRole};

    fn evaluation() -> Evaluation {
        serde_json::from_value(json!({
            "id": RecordId::new(),
            "submission_id": RecordId::new(),
            "form_code": "0003/FORM-EV/PENG/AGU/2025",
            "budget_name": "Belanja Jasa",
            "evaluated_amount": 48000000
        }))
        .unwrap()
    }

    #[test]
    fn test_sheet_follows_shared_role_order() {
        let evaluation = evaluation();
        let mut record = ApprovalRecord::empty(evaluation.id);
        record.set_date(
            ApprovalRole::CorporateSecretary,
            NaiveDate::from_ymd_opt(2025, 8, 4),
        );

        let sheet = ApprovalSheet::build(&evaluation, None, Some(&record));
        let roles: Vec<&str> = sheet.rows.iter().map(|r| r.role).collect();
        let expected: Vec<&str> = APPROVAL_SEQUENCE.iter().map(|r| r.label()).collect();
        assert_eq!(roles, expected);

        assert_eq!(sheet.rows[0].date, "04/08/2025");
        assert_eq!(sheet.rows[0].state, "Disetujui");
        assert_eq!(sheet.rows[1].state, "Menunggu");
        assert_eq!(sheet.rows[2].state, "Terkunci");
        assert_eq!(sheet.rows[2].date, "-");
        assert_eq!(sheet.progress, ApprovalProgress::InProgress);
    }

    #[test]
    fn test_missing_values_fall_back() {
        let sheet = ApprovalSheet::build(&evaluation(), None, None);
        assert_eq!(sheet.title, UNTITLED);
        assert_eq!(sheet.letter_number, "-");
        assert_eq!(sheet.budget_code, "-");
        assert_eq!(sheet.requested_amount, "-");
        assert_eq!(sheet.evaluated_amount, "Rp 48.000.000");

        let text = sheet.to_string();
        assert!(text.contains("0003/FORM-EV/PENG/AGU/2025"));
        assert!(text.ends_with("Status: proses"));
    }
}
