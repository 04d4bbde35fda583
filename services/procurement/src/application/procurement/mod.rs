//! 采购执行应用层

pub mod commands;
pub mod handlers;
pub mod migration;

pub use commands::*;
pub use handlers::ProcurementCommandHandler;
pub use migration::{LegacyLinkMigration, LinkReport};
