//! ports - 抽象 trait 层
//!
//! 定义核心逻辑依赖的外部接口：数据存储与时钟

mod clock;
mod record_store;

pub use clock::*;
pub use record_store::*;
