//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{
    AdminRepository, AdminRepositoryTrait, DatabasePool, FeedbackRepository, FeedbackRepositoryTrait,
    InternshipRepository, InternshipRepositoryTrait, OrganizationRepository, OrganizationRepositoryTrait,
    StudentRepository, StudentRepositoryTrait,
};
use shared_lib::{AppConfig, Clock, SystemClock};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch::{Receiver, Sender};
use tracing::{info, warn};

pub mod auth;
pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
///
/// 仓库都以 trait object 的形式保存，生产环境使用PostgreSQL实现，测试中可替换为内存实现。
/// 所有字段都是 [`Arc`]，clone 的开销很小，axum 会为每个请求 clone 一次。
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepositoryTrait>,
    pub internships: Arc<dyn InternshipRepositoryTrait>,
    pub feedback: Arc<dyn FeedbackRepositoryTrait>,
    pub organizations: Arc<dyn OrganizationRepositoryTrait>,
    pub admins: Arc<dyn AdminRepositoryTrait>,

    /// 提供“今天”的日期，测试中可以固定
    pub clock: Arc<dyn Clock>,

    pub config: Arc<AppConfig>,
}

impl AppState {
    /// 使用PostgreSQL仓库和系统时钟创建共享状态
    pub fn with_postgres(pool: DatabasePool, config: Arc<AppConfig>) -> Self {
        Self {
            students: Arc::new(StudentRepository::new(pool.clone())),
            internships: Arc::new(InternshipRepository::new(pool.clone())),
            feedback: Arc::new(FeedbackRepository::new(pool.clone())),
            organizations: Arc::new(OrganizationRepository::new(pool.clone())),
            admins: Arc::new(AdminRepository::new(pool)),
            clock: Arc::new(SystemClock),
            config,
        }
    }
}

/// 等待退出信号，收到后通知 Web 服务关闭
///
/// 信号监听失败时保持 `shutdown_tx` 存活，服务继续运行。
pub async fn forward_shutdown<F>(signal: F, shutdown_tx: Sender<bool>)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("🛑 收到退出信号");
            let _ = shutdown_tx.send(true);
        }
        Err(e) => {
            warn!("⚠️ 无法监听退出信号: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// 启动 Web 服务
///
/// 启动前会确保访客账号（以及配置中的初始管理员）存在。
pub async fn start_web_service(state: AppState, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    services::auth::seed_accounts(&state).await?;

    let bind_addr = state.config.bind_addr.clone();
    let router = routes::create_app_router(state);

    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被drop时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
