//! procura-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// 数据存储返回的错误（校验失败、约束冲突等）
    #[error("Record store error: {0}")]
    Store(String),

    /// 网络层错误（连接失败、超时）
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn failed_precondition(msg: impl Into<String>) -> Self {
        Self::FailedPrecondition(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::Store(_) => 500,
            Self::ExternalService(_) => 502,
            Self::FailedPrecondition(_) => 412,
            Self::Serialization(_) => 500,
        }
    }

    /// 是否来自远端数据存储（需要提示用户，但不自动重试）
    pub fn is_remote_fault(&self) -> bool {
        matches!(self, Self::Store(_) | Self::ExternalService(_))
    }

    /// 面向用户的提示文本
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => format!("Data tidak ditemukan: {}", msg),
            Self::Validation(msg) => format!("Data tidak valid: {}", msg),
            Self::Conflict(msg) => format!("Data bentrok: {}", msg),
            Self::FailedPrecondition(msg) => format!("Aksi tidak diizinkan: {}", msg),
            Self::Store(msg) => format!("Gagal menyimpan data: {}", msg),
            Self::ExternalService(_) => {
                "Tidak dapat terhubung ke server, silakan coba lagi".to_string()
            }
            Self::Internal(_) | Self::Serialization(_) => {
                "Terjadi kesalahan pada sistem".to_string()
            }
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        let slug = match self {
            Self::NotFound(_) => "not-found",
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal",
            Self::Store(_) => "record-store",
            Self::ExternalService(_) => "external-service",
            Self::FailedPrecondition(_) => "failed-precondition",
            Self::Serialization(_) => "serialization",
        };
        format!("https://procura.local/problems/{}", slug)
    }

    fn problem_title(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource Not Found".to_string(),
            Self::Validation(_) => "Validation Error".to_string(),
            Self::Conflict(_) => "Conflict".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
            Self::Store(_) => "Record Store Error".to_string(),
            Self::ExternalService(_) => "External Service Error".to_string(),
            Self::FailedPrecondition(_) => "Failed Precondition".to_string(),
            Self::Serialization(_) => "Serialization Error".to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
