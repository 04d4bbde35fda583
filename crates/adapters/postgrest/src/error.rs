//! PostgREST 错误映射

use procura_errors::AppError;
use serde::Deserialize;

/// PostgREST 错误响应体
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    details: Option<String>,
    code: Option<String>,
}

/// 将 HTTP 状态码与响应体转换为 AppError
pub fn map_response_error(status: u16, body: &str, context: &str) -> AppError {
    let detail = match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(parsed) => {
            let mut text = parsed.message.unwrap_or_else(|| body.to_string());
            if let Some(details) = parsed.details {
                text = format!("{} ({})", text, details);
            }
            if let Some(code) = parsed.code {
                text = format!("[{}] {}", code, text);
            }
            text
        }
        Err(_) => body.to_string(),
    };
    let msg = format!("{}: {}", context, detail);

    match status {
        404 => AppError::not_found(msg),
        409 => AppError::conflict(msg),
        400 | 422 => AppError::validation(msg),
        _ => AppError::store(msg),
    }
}

/// 将传输层错误转换为 AppError
pub fn map_transport_error(err: reqwest::Error, context: &str) -> AppError {
    if err.is_decode() {
        AppError::serialization(format!("{}: {}", context, err))
    } else {
        AppError::external_service(format!("{}: {}", context, err))
    }
}
