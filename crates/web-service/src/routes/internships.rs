//! 实习申请接口

use crate::auth::AdminUser;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::internships::{InternshipInfo, InternshipSubmission};
use crate::services::internship;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 提交实习申请
///
/// 表单中的学号不存在时会同时创建学生记录。新建记录的审核状态为 `Pending`。
///
/// 日期格式为 `YYYY-MM-DD`，开始日期不能晚于结束日期。
#[utoipa::path(post,
    path = "/internships",
    tag = "internships",
    request_body = InternshipSubmission,
    responses(
        (status = 201, description = "Internship submitted", body = Reply<InternshipInfo>),
        (status = 400, description = "Invalid submission")
    ),
)]
pub async fn submit_internship(
    State(state): State<AppState>,
    payload: Result<Json<InternshipSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Reply<InternshipInfo>>), AppError> {
    let Json(submission) = payload?;
    debug!("📝 提交实习申请 {:#?}", submission);

    let created = internship::submit_internship(&state, submission).await?;
    Ok((StatusCode::CREATED, Json(Reply { data: created })))
}

/// 全部实习记录
///
/// 每条记录的 `status` 都根据当天日期重新计算。
#[utoipa::path(get,
    path = "/internships",
    tag = "internships",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All internships", body = Vec<InternshipInfo>),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Admin role required")
    ),
)]
pub async fn list_internships(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> Result<Json<Vec<InternshipInfo>>, AppError> {
    debug!("🔍 {} 获取全部实习记录", admin.sub);

    Ok(Json(internship::list_internships(&state).await?))
}
