use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 请求体不是合法的json，或者缺少必填字段
    #[error(transparent)]
    JsonRejected(#[from] JsonRejection),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response(),
            // axum 默认对不同的解析错误返回 400/415/422，这里统一为 400
            AppError::JsonRejected(err) => (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", err.body_text())).into_response(),
            AppError::RepositoryError(err) if err.is_not_found() => {
                (StatusCode::NOT_FOUND, format!("Resource not found: {err}")).into_response()
            }
            AppError::RepositoryError(err) => {
                error!("❌ 仓库操作失败: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response()
            }
        }
    }
}
