//! 申请进度
//!
//! 根据采购执行、评估表、申请状态依次推导当前阶段

pub mod resolver;
pub mod stage;

pub use resolver::{ProgressResolver, stage_from_procurement_status};
pub use stage::{Progress, Stage, StageState, StageView};
