//! 实习单位管理

use crate::models::err::AppError;
use crate::models::organizations::{OrganizationCreate, OrganizationInfo};
use crate::AppState;
use tracing::info;
use validator::Validate;

pub async fn list_organizations(state: &AppState) -> Result<Vec<OrganizationInfo>, AppError> {
    let organizations = state.organizations.list_organizations().await?;
    Ok(organizations.into_iter().map(Into::into).collect())
}

/// 创建单位，名称会去掉首尾空白，重复时返回409
pub async fn create_organization(state: &AppState, create: OrganizationCreate) -> Result<OrganizationInfo, AppError> {
    create.validate()?;

    let name = create.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("Organization name must not be blank"));
    }

    let created = state.organizations.create_organization(name).await?;
    info!("🏢 已创建实习单位 {}", created.name);
    Ok(created.into())
}

pub async fn delete_organization(state: &AppState, id: i32) -> Result<OrganizationInfo, AppError> {
    let deleted = state.organizations.delete_organization(id).await?;
    info!("🗑️ 已删除实习单位 {}", deleted.name);
    Ok(deleted.into())
}
