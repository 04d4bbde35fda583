//! 领域层

pub mod approval;
pub mod evaluation;
pub mod procurement;
pub mod progress;
pub mod submission;
