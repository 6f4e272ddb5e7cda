use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// 所有失败路径统一返回的响应体
pub const NULL_BODY: &str = "null";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    /// `s` 缺失或不是 17 位数字
    InvalidInput,
    /// 上游请求失败、非 2xx 或响应体为空
    UpstreamUnavailable,
    /// 紧凑格式下响应体无法解析或 `players` 为空
    PlayerNotFound,
}

impl AppError {
    pub fn status(self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::PlayerNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            NULL_BODY,
        )
            .into_response()
    }
}
