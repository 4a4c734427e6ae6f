//! 登录与账号初始化
//!
//! 密码使用 argon2 哈希保存，登录时使用 [`PasswordVerifier`] 校验，不做明文比较。

use crate::auth::{issue_token, Role};
use crate::models::auth::{AdminLogin, GuestLogin, TokenReply};
use crate::models::err::AppError;
use crate::AppState;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use database::{Admin, AdminCreate};
use rand::rngs::OsRng;
use std::sync::OnceLock;
use tracing::{info, warn};

/// 访客账号ID，只能用于访客登录
pub const GUEST_ACCOUNT: &str = "Guest";

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
}

/// 校验密码，哈希字符串格式错误时视为校验失败
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(e) => {
            warn!("⚠️ 无法解析密码哈希: {}", e);
            false
        }
    }
}

/// 账号不存在时用来校验的哈希，保证登录失败的耗时与密码错误时一致
fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_password("internship-portal-unknown-account").ok())
        .as_deref()
}

/// 查找账号并校验密码
async fn authenticate(state: &AppState, account_id: &str, password: &str) -> Result<Admin, AppError> {
    let admin = state.admins.get_admin(account_id).await?;

    let verified = match admin {
        Some(admin) if verify_password(password, &admin.password_hash) => Some(admin),
        Some(_) => None,
        None => {
            if let Some(hash) = dummy_hash() {
                verify_password(password, hash);
            }
            None
        }
    };

    verified.ok_or_else(|| {
        warn!("🔒 登录失败: {}", account_id);
        AppError::unauthorized("Invalid credentials")
    })
}

/// 管理员登录
///
/// 访客账号不能换取管理员token。
pub async fn login_admin(state: &AppState, login: AdminLogin) -> Result<TokenReply, AppError> {
    let account_id = login.admin_id.trim();
    if account_id == GUEST_ACCOUNT {
        warn!("🔒 访客账号尝试管理员登录");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    let admin = authenticate(state, account_id, &login.password).await?;
    let (token, expires_at) = issue_token(&state.config.jwt, &admin.admin_id, &admin.name, Role::Admin)?;

    info!("🔑 管理员 {} 登录成功", admin.admin_id);
    Ok(TokenReply {
        token,
        role: Role::Admin,
        expires_at,
    })
}

/// 访客登录
///
/// 任意账号登录后都只获得访客权限。
pub async fn login_guest(state: &AppState, login: GuestLogin) -> Result<TokenReply, AppError> {
    let admin = authenticate(state, login.name.trim(), &login.password).await?;
    let (token, expires_at) = issue_token(&state.config.jwt, &admin.admin_id, &admin.name, Role::Guest)?;

    info!("🔑 访客 {} 登录成功", admin.admin_id);
    Ok(TokenReply {
        token,
        role: Role::Guest,
        expires_at,
    })
}

/// 确保访客账号和配置中的初始管理员存在
///
/// 已存在的账号不会被修改。
pub async fn seed_accounts(state: &AppState) -> Result<(), AppError> {
    dummy_hash();

    let guest = AdminCreate {
        admin_id: GUEST_ACCOUNT.to_string(),
        name: GUEST_ACCOUNT.to_string(),
        password_hash: hash_password(&state.config.guest.password)?,
    };
    if state.admins.create_admin_if_absent(guest).await? {
        info!("👤 已创建访客账号");
    }

    if let Some((admin_id, password)) = &state.config.bootstrap_admin {
        let admin = AdminCreate {
            admin_id: admin_id.clone(),
            name: admin_id.clone(),
            password_hash: hash_password(password)?,
        };
        if state.admins.create_admin_if_absent(admin).await? {
            info!("👤 已创建初始管理员账号 {}", admin_id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("Guest@123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Guest@123", &hash));
        assert!(!verify_password("guest@123", &hash));
    }

    #[test]
    fn same_password_gets_different_salts() {
        assert_ne!(hash_password("pw").unwrap(), hash_password("pw").unwrap());
    }

    #[test]
    fn unknown_account_hash_is_usable_and_rejects() {
        let hash = dummy_hash().unwrap();
        assert!(PasswordHash::new(hash).is_ok());
        assert!(!verify_password("Admin@123", hash));
        assert_eq!(dummy_hash(), Some(hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("pw", "pw"));
    }
}
