//! 学生注册接口

use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::students::{StudentInfo, StudentRegistration};
use crate::services::student;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 注册学生
///
/// 学号已存在时返回409。
#[utoipa::path(post,
    path = "/students",
    tag = "students",
    request_body = StudentRegistration,
    responses(
        (status = 201, description = "Student registered", body = Reply<StudentInfo>),
        (status = 400, description = "Invalid registration"),
        (status = 409, description = "Roll number already registered")
    ),
)]
pub async fn register_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentRegistration>, JsonRejection>,
) -> Result<(StatusCode, Json<Reply<StudentInfo>>), AppError> {
    let Json(registration) = payload?;
    debug!("📝 注册学生 {:#?}", registration);

    let student = student::register_student(&state, registration).await?;
    Ok((StatusCode::CREATED, Json(Reply { data: student })))
}
