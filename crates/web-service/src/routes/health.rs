//! 健康检查

use crate::models::common::HealthReply;
use axum::Json;

/// 存活检查
#[utoipa::path(get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthReply)
    ),
)]
pub async fn health() -> Json<HealthReply> {
    Json(HealthReply {
        status: "ok".to_string(),
    })
}
