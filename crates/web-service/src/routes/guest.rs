//! 访客接口

use crate::auth::AuthUser;
use crate::models::auth::{GuestLogin, TokenReply};
use crate::models::err::AppError;
use crate::models::guest::GuestDashboard;
use crate::services::{auth, guest};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;
use validator::Validate;

/// 访客登录
///
/// 使用管理员表中的账号登录，返回的token只有访客权限。
#[utoipa::path(post,
    path = "/guest/login",
    tag = "guest",
    request_body = GuestLogin,
    responses(
        (status = 200, description = "Login succeeded", body = TokenReply),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn guest_login(
    State(state): State<AppState>,
    payload: Result<Json<GuestLogin>, JsonRejection>,
) -> Result<Json<TokenReply>, AppError> {
    let Json(login) = payload?;
    debug!("🔑 访客登录 {}", login.name);

    login.validate()?;
    Ok(Json(auth::login_guest(&state, login).await?))
}

/// 访客看板
///
/// 列出当前正在实习的学生，按专业、班级分组。访客和管理员token都可以访问。
#[utoipa::path(get,
    path = "/guest/dashboard",
    tag = "guest",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ongoing interns grouped by branch and section", body = GuestDashboard),
        (status = 401, description = "Not logged in")
    ),
)]
pub async fn guest_dashboard(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<GuestDashboard>, AppError> {
    debug!("🔍 {} ({}) 查看访客看板", user.sub, user.role);

    Ok(Json(guest::guest_dashboard(&state).await?))
}
