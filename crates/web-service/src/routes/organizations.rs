//! 实习单位接口

use crate::auth::AdminUser;
use crate::models::common::Reply;
use crate::models::err::AppError;
use crate::models::organizations::{OrganizationCreate, OrganizationInfo};
use crate::services::organization;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 全部实习单位，按名称排序
#[utoipa::path(get,
    path = "/organizations",
    tag = "organizations",
    responses(
        (status = 200, description = "All organizations", body = Vec<OrganizationInfo>)
    ),
)]
pub async fn list_organizations(State(state): State<AppState>) -> Result<Json<Vec<OrganizationInfo>>, AppError> {
    debug!("🔍 获取实习单位列表");

    Ok(Json(organization::list_organizations(&state).await?))
}

/// 创建实习单位
#[utoipa::path(post,
    path = "/organizations",
    tag = "organizations",
    request_body = OrganizationCreate,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Organization created", body = Reply<OrganizationInfo>),
        (status = 409, description = "Organization already exists")
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    payload: Result<Json<OrganizationCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Reply<OrganizationInfo>>), AppError> {
    let Json(create) = payload?;
    debug!("📝 创建实习单位 {:#?}", create);

    let created = organization::create_organization(&state, create).await?;
    Ok((StatusCode::CREATED, Json(Reply { data: created })))
}

/// 删除实习单位
#[utoipa::path(delete,
    path = "/organizations/{id}",
    tag = "organizations",
    params(("id" = i32, Path, description = "Organization id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted organization", body = Reply<OrganizationInfo>),
        (status = 404, description = "Organization not found")
    ),
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<Reply<OrganizationInfo>>, AppError> {
    debug!("🗑️ 删除实习单位 {}", id);

    let deleted = organization::delete_organization(&state, id).await?;
    Ok(Json(Reply { data: deleted }))
}
