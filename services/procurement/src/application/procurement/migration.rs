//! 历史采购记录关联迁移
//!
//! 旧数据通过 form_code / submission_id / letter_number 字符串匹配评估表。
//! 迁移一次性写入 evaluation_id，之后所有读取只按 evaluation_id 关联。

use std::collections::HashMap;
use std::sync::Arc;

use procura_common::RecordId;
use procura_errors::AppResult;
use serde::Serialize;
use tracing::{info, warn};

use super::commands::LinkLegacyProcurementsCommand;
use crate::domain::evaluation::{Evaluation, EvaluationRepository};
use crate::domain::procurement::{Procurement, ProcurementRepository};
use crate::domain::submission::{Submission, SubmissionRepository};

/// 迁移结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// (procurement_id, evaluation_id)
    pub linked: Vec<(RecordId, RecordId)>,
    /// 无法匹配任何评估表的记录
    pub unresolved: Vec<RecordId>,
    pub already_linked: usize,
}

/// 历史关联迁移
pub struct LegacyLinkMigration<S, E, P>
where
    S: SubmissionRepository,
    E: EvaluationRepository,
    P: ProcurementRepository,
{
    submissions: Arc<S>,
    evaluations: Arc<E>,
    procurements: Arc<P>,
}

impl<S, E, P> LegacyLinkMigration<S, E, P>
where
    S: SubmissionRepository,
    E: EvaluationRepository,
    P: ProcurementRepository,
{
    pub fn new(submissions: Arc<S>, evaluations: Arc<E>, procurements: Arc<P>) -> Self {
        Self {
            submissions,
            evaluations,
            procurements,
        }
    }

    pub async fn handle(&self, cmd: LinkLegacyProcurementsCommand) -> AppResult<LinkReport> {
        let submissions = self.submissions.list_all().await?;
        let evaluations = self.evaluations.list_all().await?;
        let procurements = self.procurements.list_all().await?;

        let index = LegacyIndex::build(&submissions, &evaluations);
        let mut report = LinkReport::default();

        for procurement in &procurements {
            if procurement.is_linked() {
                report.already_linked += 1;
                continue;
            }

            match index.resolve(procurement) {
                Some(evaluation_id) => {
                    if !cmd.dry_run {
                        self.procurements
                            .link_evaluation(&procurement.id, &evaluation_id)
                            .await?;
                    }
                    report.linked.push((procurement.id, evaluation_id));
                }
                None => {
                    warn!(procurement_id = %procurement.id, "Legacy procurement has no matching evaluation");
                    report.unresolved.push(procurement.id);
                }
            }
        }

        info!(
            linked = report.linked.len(),
            unresolved = report.unresolved.len(),
            already_linked = report.already_linked,
            dry_run = cmd.dry_run,
            "Legacy procurement link migration finished"
        );
        Ok(report)
    }
}

/// 旧字段到评估表 ID 的查找表
struct LegacyIndex {
    by_form_code: HashMap<String, RecordId>,
    by_submission: HashMap<RecordId, RecordId>,
    by_letter_number: HashMap<String, RecordId>,
}

impl LegacyIndex {
    fn build(submissions: &[Submission], evaluations: &[Evaluation]) -> Self {
        let by_form_code = evaluations
            .iter()
            .map(|e| (normalize(&e.form_code), e.id))
            .collect();
        let by_submission: HashMap<RecordId, RecordId> =
            evaluations.iter().map(|e| (e.submission_id, e.id)).collect();
        let by_letter_number = submissions
            .iter()
            .filter_map(|s| {
                let letter = s.letter_number.as_deref().map(normalize)?;
                let evaluation_id = by_submission.get(&s.id)?;
                (!letter.is_empty()).then_some((letter, *evaluation_id))
            })
            .collect();

        Self {
            by_form_code,
            by_submission,
            by_letter_number,
        }
    }

    /// 依次按 form_code、submission_id、letter_number 匹配
    fn resolve(&self, procurement: &Procurement) -> Option<RecordId> {
        let link = procurement.legacy_link();
        link.form_code
            .and_then(|code| self.by_form_code.get(&normalize(code)))
            .or_else(|| link.submission_id.and_then(|id| self.by_submission.get(id)))
            .or_else(|| {
                link.letter_number
                    .and_then(|letter| self.by_letter_number.get(&normalize(letter)))
            })
            .copied()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}
