//! 采购执行 (pengadaan) 领域模块

#![allow(clippy::module_inception)]

pub mod procurement;
pub mod repository;

pub use procurement::{LegacyLink, NewProcurement, Procurement, ProcurementUpdate};
pub use repository::ProcurementRepository;
