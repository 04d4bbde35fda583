//! procura-adapter-memory - 内存数据存储
//!
//! 与 PostgREST 语义一致的进程内实现，用于测试与本地演示

mod store;

pub use store::*;
