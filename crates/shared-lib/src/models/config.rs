use crate::branch::BranchCatalog;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::{Result, Section};
use std::str::FromStr;
use std::sync::Arc;

/// JWT签名配置
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256签名密钥，必须通过环境变量 `JWT_SECRET` 注入
    pub secret: String,

    /// token有效期（分钟）
    /// 可通过环境变量 `JWT_TTL_MINUTES` 来调整，默认120分钟
    pub ttl_minutes: i64,
}

/// 访客账号配置
///
/// 服务启动时会确保数据库中存在 `Guest` 账号，密码取自这里。
#[derive(Debug, Clone)]
pub struct GuestConfig {
    pub password: String,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// Web服务监听地址，默认 `0.0.0.0:8080`
    pub bind_addr: String,

    /// 日志级别，默认 `debug`
    pub log_level: String,

    pub jwt: JwtConfig,

    pub guest: GuestConfig,

    /// 启动时初始化的管理员账号 `(admin_id, password)`，可选
    pub bootstrap_admin: Option<(String, String)>,

    /// 已知专业列表
    /// 可通过环境变量 `KNOWN_BRANCHES`（逗号分隔）来调整
    pub branches: BranchCatalog,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        let _ = dotenvy::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 从任意键值来源构建配置
    ///
    /// [`AppConfig::load`] 使用环境变量作为来源，测试中可以直接传入闭包。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = non_empty("DATABASE_URL")
            .ok_or_else(|| eyre!("Can not load DATABASE_URL in environment"))
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let jwt_secret = non_empty("JWT_SECRET")
            .ok_or_else(|| eyre!("Can not load JWT_SECRET in environment"))
            .suggestion("设置 JWT_SECRET 环境变量，用于签发登录token")?;

        let ttl_minutes = parse_or("JWT_TTL_MINUTES", non_empty("JWT_TTL_MINUTES"), 120i64)?;
        if ttl_minutes <= 0 {
            return Err(eyre!("JWT_TTL_MINUTES must be positive, got {ttl_minutes}"));
        }

        let bootstrap_admin = match (non_empty("ADMIN_ID"), non_empty("ADMIN_PASSWORD")) {
            (Some(id), Some(password)) => Some((id, password)),
            (None, None) => None,
            _ => {
                return Err(eyre!("ADMIN_ID and ADMIN_PASSWORD must be set together")
                    .suggestion("同时设置或同时删除 ADMIN_ID / ADMIN_PASSWORD"));
            }
        };

        let branches = match non_empty("KNOWN_BRANCHES") {
            Some(list) => BranchCatalog::new(list.split(',')),
            None => BranchCatalog::default(),
        };

        Ok(AppConfig {
            postgresql_conn_str: db_url,
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "debug".to_string()),
            jwt: JwtConfig {
                secret: jwt_secret,
                ttl_minutes,
            },
            guest: GuestConfig {
                password: non_empty("GUEST_PASSWORD").unwrap_or_else(|| "Guest@123".to_string()),
            },
            bootstrap_admin,
            branches,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .parse()
            .wrap_err_with(|| format!("Invalid {key} value `{raw}`")),
        None => Ok(default),
    }
}
