//! 评估表应用层

pub mod commands;
pub mod handlers;

pub use commands::*;
pub use handlers::EvaluationCommandHandler;
