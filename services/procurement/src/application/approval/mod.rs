//! 会签应用层

pub mod commands;
pub mod handlers;

pub use commands::*;
pub use handlers::{ApprovalCommandHandler, DateSaved};
