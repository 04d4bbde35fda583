//! Procurement Service 入口
//!
//! 按刷新周期重新读取看板数据并输出汇总；`link-legacy [--dry-run]` 执行一次
//! 历史采购记录的关联迁移后退出。

use std::sync::Arc;

use procura_bootstrap::{Infrastructure, ShutdownController, run};
use procura_errors::AppResult;
use procura_ports::RecordStore;
use tracing::{info, warn};

use procurement::application::{
    DashboardQueryHandler, DashboardSettings, LegacyLinkMigration, LinkLegacyProcurementsCommand,
};
use procurement::infrastructure::{
    CachedRecordStore, StoreApprovalRepository, StoreEvaluationRepository,
    StoreProcurementRepository, StoreSubmissionRepository,
};

type Dashboard = DashboardQueryHandler<
    StoreSubmissionRepository,
    StoreEvaluationRepository,
    StoreApprovalRepository,
    StoreProcurementRepository,
>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let link_legacy = args.iter().any(|arg| arg == "link-legacy");
    let dry_run = args.iter().any(|arg| arg == "--dry-run");

    run("config", move |infra: Infrastructure, shutdown| async move {
        info!("Initializing Procurement Service...");

        let dashboard_config = infra.config().dashboard.clone();
        let cached = Arc::new(CachedRecordStore::new(
            infra.record_store(),
            dashboard_config.refresh_interval(),
            dashboard_config.cache_max_capacity,
        ));
        let store: Arc<dyn RecordStore> = cached.clone();

        let submissions = Arc::new(StoreSubmissionRepository::new(store.clone()));
        let evaluations = Arc::new(StoreEvaluationRepository::new(store.clone()));
        let approvals = Arc::new(StoreApprovalRepository::new(store.clone()));
        let procurements = Arc::new(StoreProcurementRepository::new(store));

        if link_legacy {
            let migration = LegacyLinkMigration::new(submissions, evaluations, procurements);
            let report = migration
                .handle(LinkLegacyProcurementsCommand { dry_run })
                .await?;
            info!(
                linked = report.linked.len(),
                unresolved = report.unresolved.len(),
                dry_run,
                "Legacy links migrated"
            );
            return Ok(());
        }

        let dashboard = DashboardQueryHandler::new(
            submissions,
            evaluations,
            approvals,
            procurements,
            DashboardSettings {
                page_size: dashboard_config.page_size,
                amount_range_ceiling: dashboard_config.amount_range_ceiling as f64,
            },
        );

        refresh_loop(&dashboard, &cached, &infra, &shutdown, dashboard_config.refresh_interval())
            .await
    })
    .await
}

/// 按刷新周期丢弃读缓存并重新计算汇总，直到收到关闭信号
async fn refresh_loop(
    dashboard: &Dashboard,
    cache: &CachedRecordStore,
    infra: &Infrastructure,
    shutdown: &ShutdownController,
    interval: std::time::Duration,
) -> AppResult<()> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                cache.refresh().await;
                match dashboard.status_summary().await {
                    Ok(summary) => info!(
                        total = summary.total_submissions,
                        awaiting_review = summary.awaiting_review,
                        rejected = summary.rejected,
                        approvals_finished = summary.approvals_finished,
                        approvals_in_progress = summary.approvals_in_progress,
                        unlinked_procurements = summary.unlinked_procurements,
                        "Dashboard refreshed"
                    ),
                    Err(e) => warn!(
                        error = %e,
                        message = %e.user_message(),
                        "Dashboard refresh failed"
                    ),
                }
                if let Some(metrics) = infra.render_metrics() {
                    tracing::trace!(metrics = %metrics, "Metrics snapshot");
                }
            }
            _ = shutdown.wait() => {
                info!("Refresh loop stopped");
                return Ok(());
            }
        }
    }
}
