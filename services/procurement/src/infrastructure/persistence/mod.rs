//! 基于 RecordStore 的仓储实现

mod approval_repository;
mod evaluation_repository;
mod procurement_repository;
pub mod row_mapper;
mod submission_repository;
pub mod tables;

pub use approval_repository::StoreApprovalRepository;
pub use evaluation_repository::StoreEvaluationRepository;
pub use procurement_repository::StoreProcurementRepository;
pub use submission_repository::StoreSubmissionRepository;
