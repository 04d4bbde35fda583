//! 会签命令定义

use chrono::NaiveDate;

/// 写入某个角色的签署日期
#[derive(Debug, Clone)]
pub struct SetApprovalDateCommand {
    pub evaluation_id: String,
    /// 角色代码或数据列名，如 `finance` / `finance_date`
    pub role: String,
    pub date: NaiveDate,
}
