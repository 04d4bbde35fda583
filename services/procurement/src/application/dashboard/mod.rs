//! 看板查询
//!
//! 所有查询基于一次性读取的数据快照，在内存中关联、筛选与分页

pub mod queries;
pub mod report;
pub mod rows;
pub mod snapshot;
pub mod summary;

pub use queries::{DashboardQueryHandler, DashboardSettings};
pub use report::{ApprovalSheet, ApprovalSheetRow};
pub use rows::{ApprovalRow, ProcurementRow, ProgressRow};
pub use snapshot::Snapshot;
pub use summary::{StageCount, StatusSummary};
