use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

/// 健康检查接口
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "ok",
    )
}
