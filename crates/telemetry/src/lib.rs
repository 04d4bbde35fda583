//! telemetry - 可观测性库

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 数据存储请求计数
pub const STORE_REQUESTS_TOTAL: &str = "record_store_requests_total";
/// 数据存储错误计数
pub const STORE_ERRORS_TOTAL: &str = "record_store_errors_total";
/// 数据存储请求耗时
pub const STORE_REQUEST_DURATION_MS: &str = "record_store_request_duration_ms";
/// 读缓存命中计数
pub const STORE_CACHE_HITS_TOTAL: &str = "record_store_cache_hits_total";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Failed to install Prometheus recorder: {0}")]
    Metrics(String),
}

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // 重复初始化（例如测试中）时忽略
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init();
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> Result<metrics_exporter_prometheus::PrometheusHandle, TelemetryError> {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| TelemetryError::Metrics(e.to_string()))?;

    metrics::describe_counter!(STORE_REQUESTS_TOTAL, "Requests sent to the record store");
    metrics::describe_counter!(STORE_ERRORS_TOTAL, "Failed record store requests");
    metrics::describe_histogram!(
        STORE_REQUEST_DURATION_MS,
        metrics::Unit::Milliseconds,
        "Record store request latency"
    );
    metrics::describe_counter!(STORE_CACHE_HITS_TOTAL, "Reads served from the snapshot cache");

    Ok(handle)
}
