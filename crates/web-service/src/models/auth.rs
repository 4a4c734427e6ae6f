use crate::auth::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 管理员登录
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogin {
    #[schema(example = "admin")]
    #[validate(length(min = 1, max = 64))]
    pub admin_id: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// 访客登录
///
/// `name` 为管理员表中的账号ID，通常是 `Guest`。
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct GuestLogin {
    #[schema(example = "Guest")]
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// 登录成功返回的token
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenReply {
    pub token: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}
