//! 采购申请应用层

pub mod commands;
pub mod handlers;

pub use commands::*;
pub use handlers::{ApprovalOutcome, SubmissionCommandHandler};
