//! 评估表会签 (form_approval) 领域模块
//!
//! 五个固定角色按顺序签署，前一角色签署后下一角色才解锁

pub mod record;
pub mod repository;
pub mod role;
pub mod tracker;

pub use record::ApprovalRecord;
pub use repository::ApprovalRepository;
pub use role::{APPROVAL_SEQUENCE, ApprovalRole};
pub use tracker::{ApprovalError, ApprovalProgress, DateChange, RoleState};
