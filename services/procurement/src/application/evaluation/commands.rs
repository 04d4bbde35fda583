//! 评估表命令定义

use procura_domain_core::Rupiah;

use crate::domain::evaluation::EvaluationInput;

/// 更新评估人填写的字段，`None` 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UpdateEvaluationCommand {
    pub evaluation_id: String,
    pub budget_name: Option<String>,
    pub budget_code: Option<String>,
    pub evaluated_amount: Option<i64>,
}

impl UpdateEvaluationCommand {
    pub fn into_input(self) -> Result<EvaluationInput, String> {
        let evaluated_amount = self
            .evaluated_amount
            .map(Rupiah::new)
            .transpose()
            .map_err(|e| e.to_string())?;

        Ok(EvaluationInput {
            budget_name: self.budget_name.map(|v| v.trim().to_string()),
            budget_code: self.budget_code.map(|v| v.trim().to_string()),
            evaluated_amount,
        })
    }
}

/// 定稿命令
#[derive(Debug, Clone)]
pub struct FinalizeEvaluationCommand {
    pub evaluation_id: String,
}
