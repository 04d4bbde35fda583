//! PostgREST 客户端配置

use std::time::Duration;

use secrecy::Secret;

/// PostgREST 配置
#[derive(Debug, Clone)]
pub struct PostgrestConfig {
    /// 服务根地址
    pub base_url: String,
    /// REST 路径前缀
    pub rest_path: String,
    /// anon / service key，同时用于 `apikey` 与 Bearer 头
    pub api_key: Secret<String>,
    /// 请求超时
    pub timeout: Duration,
}

impl PostgrestConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            rest_path: "/rest/v1".to_string(),
            api_key: Secret::new(api_key.into()),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_rest_path(mut self, rest_path: impl Into<String>) -> Self {
        self.rest_path = rest_path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 表的完整 URL
    pub fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.rest_path.trim_matches('/'),
            table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_normalizes_slashes() {
        let config = PostgrestConfig::new("https://db.example.com/", "key");
        assert_eq!(
            config.table_url("pengajuan"),
            "https://db.example.com/rest/v1/pengajuan"
        );

        let config = config.with_rest_path("api/");
        assert_eq!(
            config.table_url("pengajuan"),
            "https://db.example.com/api/pengajuan"
        );
    }
}
