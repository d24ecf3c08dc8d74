//! Web服务模块
//!
//! 提供 `/api/v1/projects` HTTP 接口和文档服务

use color_eyre::Result;
use database::ProjectRepositoryTrait;
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{info, warn};

pub mod cors;
pub mod models;
pub mod routes;

pub use cors::cors_layer;
pub use routes::create_app_router;

/// 应用共享状态
///
/// 仓库是 trait object，启动时根据配置决定使用 PostgreSQL 还是内存实现。
#[derive(Clone)]
pub struct AppState {
    pub project_repository: Arc<dyn ProjectRepositoryTrait>,
}

impl AppState {
    pub fn new(project_repository: Arc<dyn ProjectRepositoryTrait>) -> Self {
        Self { project_repository }
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的关闭信号后停止接收新连接，等待正在处理的请求结束后返回。
pub async fn start_web_service(
    config: Arc<AppConfig>,
    project_repository: Arc<dyn ProjectRepositoryTrait>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let router = create_app_router(AppState::new(project_repository), cors_layer(&config.cors_allowed_origins)?);

    info!("🌐 允许跨域来源: {:?}", config.cors_allowed_origins);
    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            if shutdown_rx.changed().await.is_err() {
                warn!("⚠️ 关闭信号通道已断开");
            }
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
