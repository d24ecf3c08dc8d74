//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的 trait 约束：
//!
//! ```rust,ignore
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send + Sync`：同一个仓库实例会被多个请求并发访问
//! - `'static`：仓库放在 [`std::sync::Arc`] 中作为全局共享状态，生命周期和程序一样长
//!
//! 使用 [`async_trait`] 后 trait 是 object safe 的，Web 层持有的是 `Arc<dyn ProjectRepositoryTrait>`，
//! 这样启动时可以根据配置选择 PostgreSQL 或者内存实现：
//!
//! ```rust,ignore
//! let repository: Arc<dyn ProjectRepositoryTrait> = match config.store {
//!     StoreKind::Postgres => Arc::new(ProjectRepository::new(pool)),
//!     StoreKind::Memory => Arc::new(MemoryProjectRepository::new()),
//! };
//! ```

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
