//! 管理员接口
//!
//! 除登录以外的所有接口都需要管理员token。

use crate::auth::AdminUser;
use crate::models::analytics::{AnalyticsReply, DashboardStats};
use crate::models::auth::{AdminLogin, TokenReply};
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::feedback::FeedbackInfo;
use crate::models::internships::{EnrichedInternship, FilterQuery, InternshipInfo, RollProfile, StatusUpdate};
use crate::models::students::{StudentInfo, StudentListQuery};
use crate::services::{auth, feedback, internship, student};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 筛选结果中因找不到学生而被排除的实习数量
pub const JOIN_EXCLUDED_HEADER: HeaderName = HeaderName::from_static("x-join-excluded");

fn excluded_header(excluded: usize) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(JOIN_EXCLUDED_HEADER, HeaderValue::from(excluded));
    headers
}

/// 管理员登录
#[utoipa::path(post,
    path = "/admin/login",
    tag = "admin",
    request_body = AdminLogin,
    responses(
        (status = 200, description = "Login succeeded", body = TokenReply),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    payload: Result<Json<AdminLogin>, JsonRejection>,
) -> Result<Json<TokenReply>, AppError> {
    let Json(login) = payload?;
    debug!("🔑 管理员登录 {}", login.admin_id);

    login.validate()?;
    Ok(Json(auth::login_admin(&state, login).await?))
}

/// 筛选实习
///
/// 所有查询参数都是可选的，参数之间是“且”的关系：
///
/// - `type`: `future` / `ongoing` / `past` / `all`
/// - `branch`: 专业，`Other` 匹配所有不在已知专业列表中的专业
/// - `semester`、`section`: 精确匹配
/// - `year` + `month`: 开始日期不早于该月第一天，只给其中一个时按开始日期的年份或月份精确匹配
/// - `endYear` + `endMonth`: 结束日期不晚于该月最后一天，只给其中一个时按结束日期的年份或月份精确匹配
/// - `company`: 公司名称子串或公司缩写
///
/// 找不到学生的实习会被排除，数量放在响应头 `x-join-excluded` 中。
#[utoipa::path(get,
    path = "/admin/internships/filter",
    tag = "admin",
    params(FilterQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Filtered internships", body = Vec<EnrichedInternship>,
            headers(("x-join-excluded" = usize, description = "Internships dropped because no student matched"))),
        (status = 400, description = "Invalid filter parameters")
    ),
)]
pub async fn filter_internships(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<FilterQuery>,
) -> Result<(HeaderMap, Json<Vec<EnrichedInternship>>), AppError> {
    debug!("🔍 筛选实习 {:#?}", query);

    let outcome = internship::filter_internships(&state, query).await?;
    let records = outcome.records.into_iter().map(Into::into).collect();

    Ok((excluded_header(outcome.excluded), Json(records)))
}

/// 按专业和学期统计
///
/// 查询参数与 [`filter_internships`] 相同，先筛选再统计。
#[utoipa::path(get,
    path = "/admin/analytics",
    tag = "admin",
    params(FilterQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts by branch and semester", body = AnalyticsReply),
        (status = 400, description = "Invalid filter parameters")
    ),
)]
pub async fn analytics(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<FilterQuery>,
) -> Result<(HeaderMap, Json<AnalyticsReply>), AppError> {
    debug!("📊 统计实习 {:#?}", query);

    let (reply, excluded) = internship::analytics(&state, query).await?;
    Ok((excluded_header(excluded), Json(reply)))
}

/// 修改审核状态
///
/// 只修改管理员记录的审核状态，返回中的 `status` 仍然根据日期计算。
#[utoipa::path(patch,
    path = "/admin/internships/{id}/status",
    tag = "admin",
    params(("id" = i32, Path, description = "Internship id")),
    request_body = StatusUpdate,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated internship", body = Reply<InternshipInfo>),
        (status = 404, description = "Internship not found")
    ),
)]
pub async fn update_internship_status(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Reply<InternshipInfo>>, AppError> {
    let Json(update) = payload?;
    debug!("✏️ 修改实习 {} 审核状态 {:#?}", id, update);

    update.validate()?;
    let updated = internship::update_recorded_status(&state, id, update.status).await?;
    Ok(Json(Reply { data: updated }))
}

/// 删除实习记录
#[utoipa::path(delete,
    path = "/admin/internships/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Internship id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted internship", body = Reply<InternshipInfo>),
        (status = 404, description = "Internship not found")
    ),
)]
pub async fn delete_internship(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<Reply<InternshipInfo>>, AppError> {
    debug!("🗑️ 删除实习 {}", id);

    let deleted = internship::delete_internship(&state, id).await?;
    Ok(Json(Reply { data: deleted }))
}

/// 按学期、班级查询学生
#[utoipa::path(get,
    path = "/admin/students",
    tag = "admin",
    params(StudentListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matching students", body = Vec<StudentInfo>)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<StudentListQuery>,
) -> Result<Json<Vec<StudentInfo>>, AppError> {
    debug!("🔍 查询学生 {:#?}", query);

    Ok(Json(student::list_students(&state, query).await?))
}

/// 按学号查询学生及其全部实习
#[utoipa::path(get,
    path = "/admin/roll/{roll_number}",
    tag = "admin",
    params(("roll_number" = String, Path, description = "Student roll number")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Student profile", body = RollProfile),
        (status = 404, description = "Student not found")
    ),
)]
pub async fn roll_profile(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(roll_number): Path<String>,
) -> Result<Json<RollProfile>, AppError> {
    debug!("🔍 查询学号 {}", roll_number);

    Ok(Json(internship::roll_profile(&state, roll_number.trim()).await?))
}

/// 全部实习反馈
#[utoipa::path(get,
    path = "/admin/feedbacks",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All feedback", body = Vec<FeedbackInfo>)
    ),
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<FeedbackInfo>>, AppError> {
    debug!("🔍 获取全部实习反馈");

    Ok(Json(feedback::list_feedback(&state).await?))
}

/// 管理后台首页统计
#[utoipa::path(get,
    path = "/admin/dashboard-stats",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Totals and counts by status", body = DashboardStats)
    ),
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<DashboardStats>, AppError> {
    debug!("📊 获取首页统计");

    Ok(Json(internship::dashboard_stats(&state).await?))
}
