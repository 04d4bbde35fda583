//! procura-config - 配置加载库

use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

/// 环境变量前缀，例如 `PROCURA_STORE__URL`
pub const ENV_PREFIX: &str = "PROCURA_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// 数据存储 (PostgREST) 配置
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// 服务根地址，例如 `https://xyz.supabase.co`
    pub url: String,
    pub api_key: Secret<String>,
    #[serde(default = "default_rest_path")]
    pub rest_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_rest_path() -> String {
    "/rest/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 看板配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 读缓存与看板刷新周期（秒）
    pub refresh_interval_secs: u64,
    pub page_size: u32,
    /// 计算"今天"时使用的 UTC 偏移（小时），默认 WIB (+7)
    pub utc_offset_hours: i32,
    pub cache_max_capacity: u64,
    /// 金额区间控件的上限，选到该值表示不限上界
    pub amount_range_ceiling: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 30,
            page_size: 10,
            utc_offset_hours: 7,
            cache_max_capacity: 1_000,
            amount_range_ceiling: 1_000_000_000,
        }
    }
}

impl DashboardConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            metrics_enabled: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub store: StoreConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.url.trim().is_empty() {
            return Err(ConfigError::Invalid("store.url cannot be empty".to_string()));
        }
        if self.dashboard.page_size == 0 {
            return Err(ConfigError::Invalid(
                "dashboard.page_size must be positive".to_string(),
            ));
        }
        if self.dashboard.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "dashboard.refresh_interval_secs must be positive".to_string(),
            ));
        }
        if self.dashboard.amount_range_ceiling <= 0 {
            return Err(ConfigError::Invalid(
                "dashboard.amount_range_ceiling must be positive".to_string(),
            ));
        }
        if !(-12..=14).contains(&self.dashboard.utc_offset_hours) {
            return Err(ConfigError::Invalid(
                "dashboard.utc_offset_hours out of range".to_string(),
            ));
        }
        Ok(())
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
