//! 基础设施资源

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use procura_adapter_postgrest::{PostgrestConfig, PostgrestStore};
use procura_config::AppConfig;
use procura_errors::AppResult;
use procura_ports::{Clock, RecordStore, SystemClock};
use procura_telemetry::init_metrics;
use secrecy::ExposeSecret;
use tracing::{info, warn};

/// 基础设施资源容器
pub struct Infrastructure {
    config: AppConfig,
    record_store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    metrics: Option<PrometheusHandle>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let store_config = PostgrestConfig::new(
            config.store.url.clone(),
            config.store.api_key.expose_secret().clone(),
        )
        .with_rest_path(config.store.rest_path.clone())
        .with_timeout(config.store.timeout());
        let record_store = PostgrestStore::new(store_config)?;
        info!(url = %config.store.url, "Record store client created");

        let clock = SystemClock::with_offset_hours(config.dashboard.utc_offset_hours);

        let metrics = if config.telemetry.metrics_enabled {
            match init_metrics() {
                Ok(handle) => Some(handle),
                Err(e) => {
                    warn!(error = %e, "Metrics disabled");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(config, Arc::new(record_store), Arc::new(clock), metrics))
    }

    /// 直接组装（测试或本地演示使用内存存储时）
    pub fn new(
        config: AppConfig,
        record_store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config,
            record_store,
            clock,
            metrics,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn record_store(&self) -> Arc<dyn RecordStore> {
        self.record_store.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// Prometheus 文本输出（未启用时为 None）
    pub fn render_metrics(&self) -> Option<String> {
        self.metrics.as_ref().map(PrometheusHandle::render)
    }
}
