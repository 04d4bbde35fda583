//! 服务启动器

use std::future::Future;

use procura_config::AppConfig;
use procura_errors::AppResult;
use tracing::{error, info};

use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};
use crate::shutdown::ShutdownController;

/// 运行服务
///
/// 1. 加载配置
/// 2. 初始化日志
/// 3. 创建基础设施资源
/// 4. 监听关闭信号
/// 5. 运行 `app` 直到其返回
///
/// `app` 应在 `ShutdownController::wait` 返回后尽快结束。
pub async fn run<F, Fut>(config_dir: &str, app: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure, ShutdownController) -> Fut,
    Fut: Future<Output = AppResult<()>>,
{
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);

    let infra = Infrastructure::from_config(config)?;
    let shutdown = ShutdownController::new();

    let trigger = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        trigger.shutdown();
    });

    match app(infra, shutdown).await {
        Ok(()) => {
            info!("Service stopped");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Service failed");
            Err(e.into())
        }
    }
}
