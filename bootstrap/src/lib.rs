//! procura-bootstrap - 统一启动骨架
//!
//! 加载配置、初始化日志与指标、创建数据存储客户端，并处理优雅关闭

mod infrastructure;
mod runtime;
mod shutdown;
mod starter;

pub use infrastructure::*;
pub use runtime::*;
pub use shutdown::*;
pub use starter::*;
