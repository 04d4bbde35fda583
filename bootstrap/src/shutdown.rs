//! Graceful Shutdown

use std::future::Future;

use procura_errors::AppResult;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shutdown 控制器
#[derive(Clone, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 触发关闭
    pub fn shutdown(&self) {
        info!("Triggering shutdown");
        self.token.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.token.is_cancelled()
    }

    /// 等待关闭（已触发时立即返回）
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }
}

/// 运行任务直到完成或收到关闭
pub async fn run_with_shutdown<Fut>(shutdown: &ShutdownController, task: Fut) -> AppResult<()>
where
    Fut: Future<Output = AppResult<()>>,
{
    tokio::select! {
        result = task => result,
        _ = shutdown.wait() => {
            info!("Task cancelled due to shutdown");
            Ok(())
        }
    }
}
