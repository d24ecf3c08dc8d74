use color_eyre::Result;
use database::{
    demo_projects, initialize_database, seed_if_empty, MemoryProjectRepository, ProjectRepository, ProjectRepositoryTrait,
};
use shared_lib::{AppConfig, StoreKind};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 先加载配置，.env 里的 RUST_LOG 也能生效
    let config = AppConfig::load()?;

    // 默认输出 info，本项目的 crate 输出 debug，可通过 RUST_LOG 覆盖
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,portfolio_api=debug,web_service=debug,database=debug")),
        )
        .init();

    let project_repository: Arc<dyn ProjectRepositoryTrait> = match config.store {
        StoreKind::Postgres => {
            let pool = initialize_database(&config.database).await?;
            Arc::new(ProjectRepository::new(pool))
        }
        StoreKind::Memory => {
            info!("🧪 使用内存存储，重启后数据会丢失");
            Arc::new(MemoryProjectRepository::new())
        }
    };

    if config.seed_demo_projects {
        seed_if_empty(project_repository.as_ref(), demo_projects()).await?;
    }

    // 关闭信号：收到 Ctrl-C / SIGTERM 后通知 Web Service 优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("📴 收到关闭信号");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, project_repository, shutdown_rx).await?;

    info!("👋 服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("❌ 无法监听 Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("❌ 无法监听 SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
