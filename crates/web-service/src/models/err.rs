use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求体验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error("Validate failed: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    /// 请求体不是合法的json，或者字段类型不匹配（例如日期格式错误）
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// 参数错误（查询参数格式、业务前置条件不满足等）
    #[error("{0}")]
    BadRequest(String),

    /// 未登录或token无效
    #[error("{0}")]
    Unauthorized(String),

    /// 已登录但角色不满足
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn bad_request<T: ToString>(msg: T) -> Self {
        Self::BadRequest(msg.to_string())
    }

    pub fn unauthorized<T: ToString>(msg: T) -> Self {
        Self::Unauthorized(msg.to_string())
    }

    pub fn internal<T: ToString>(msg: T) -> Self {
        Self::InternalError(msg.to_string())
    }
}

/// Tell axum how to convert `AppError` into a response.
///
/// 服务端错误只返回通用信息，具体原因写入日志。
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")),
            AppError::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Resource not found: {what}")),
                DatabaseError::Duplicate(what) => (StatusCode::CONFLICT, format!("Resource already exists: {what}")),
                other => {
                    error!("❌ 数据库错误: {}", other);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
                }
            },
            AppError::InternalError(msg) => {
                error!("❌ 内部错误: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
