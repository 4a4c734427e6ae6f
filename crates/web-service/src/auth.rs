//! 登录token与鉴权提取器
//!
//! token使用 HS256 签名的JWT，密钥来自配置 [`JwtConfig`]。
//! 需要登录的接口在参数中声明 [`AuthUser`]（任意角色）或 [`AdminUser`]（仅管理员）即可。

use crate::models::err::AppError;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_lib::JwtConfig;
use std::fmt;
use tracing::debug;
use utoipa::ToSchema;

/// 登录角色
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guest,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Guest => f.write_str("guest"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    /// 账号ID
    pub sub: String,
    pub name: String,
    pub role: Role,
    pub exp: usize,
}

/// 签发token，返回 `(token, 过期时间)`
pub fn issue_token(
    config: &JwtConfig,
    account_id: &str,
    name: &str,
    role: Role,
) -> Result<(String, DateTime<Utc>), AppError> {
    let expires_at = Utc::now() + Duration::minutes(config.ttl_minutes);
    let claims = Claims {
        sub: account_id.to_string(),
        name: name.to_string(),
        role,
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("token encoding failed: {e}")))?;

    Ok((token, expires_at))
}

/// 校验token签名与有效期
pub fn decode_token(config: &JwtConfig, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!("🔒 token校验失败: {}", e);
        AppError::unauthorized("Invalid or expired token")
    })
}

/// 已登录用户（管理员或访客）
///
/// 从 `Authorization: Bearer <token>` 请求头中解析。
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Authorization header must use the Bearer scheme"))?;

        let claims = decode_token(&state.config.jwt, token)?;
        Ok(AuthUser(claims))
    }
}

/// 管理员用户，访客token会被拒绝（403）
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        if claims.role != Role::Admin {
            return Err(AppError::Forbidden("Admin role required".to_string()));
        }
        Ok(AdminUser(claims))
    }
}
