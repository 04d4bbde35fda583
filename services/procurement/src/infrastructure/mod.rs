//! 基础设施层

pub mod cache;
pub mod persistence;

pub use cache::CachedRecordStore;
pub use persistence::{
    StoreApprovalRepository, StoreEvaluationRepository, StoreProcurementRepository,
    StoreSubmissionRepository,
};
