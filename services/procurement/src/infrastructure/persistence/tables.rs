//! 数据表名

pub const SUBMISSIONS: &str = "pengajuan";
pub const EVALUATIONS: &str = "form_evaluasi";
pub const APPROVALS: &str = "form_approval";
pub const PROCUREMENTS: &str = "pengadaan";

pub const ALL_TABLES: [&str; 4] = [SUBMISSIONS, EVALUATIONS, APPROVALS, PROCUREMENTS];
