//! 实习管理门户后端入口
//!
//! 启动顺序：加载配置 -> 初始化日志 -> 连接数据库并执行迁移 -> 启动Web服务。
//! 收到 Ctrl-C 后通过 watch 通道通知Web服务优雅退出。

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::initialize_database;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;
use web_service::{forward_shutdown, start_web_service, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app_config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&app_config.log_level).unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    info!("🚀 实习管理门户启动中...");

    let pool = initialize_database(&app_config)
        .await
        .wrap_err("Connect to postgresql database")?;

    let state = AppState::with_postgres(pool, app_config);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(forward_shutdown(tokio::signal::ctrl_c(), shutdown_tx));

    start_web_service(state, shutdown_rx).await?;

    info!("👋 实习管理门户已退出");
    Ok(())
}
