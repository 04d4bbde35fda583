//! Procurement - 采购流程服务
//!
//! 采购申请 (pengajuan) → 审批 → 评估表 (form_evaluasi) → 五方会签
//! (form_approval) → 采购执行 (pengadaan)。数据全部存放在托管数据库中，
//! 通过 `RecordStore` 访问。

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WorkflowError;
