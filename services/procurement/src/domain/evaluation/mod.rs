//! 评估表 (form_evaluasi) 领域模块

#![allow(clippy::module_inception)]

pub mod evaluation;
pub mod form_code;
pub mod repository;

pub use evaluation::{Evaluation, EvaluationInput, NewEvaluation};
pub use form_code::{FormCode, FormCodeError};
pub use repository::EvaluationRepository;
