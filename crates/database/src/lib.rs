//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、项目仓库等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::project::{ProjectData, ProjectInfo};
pub use repositories::{MemoryProjectRepository, ProjectRepository, ProjectRepositoryTrait};
pub use seed::{demo_projects, seed_if_empty};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
