//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{ProjectData, ProjectInfo};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目列表（按创建顺序）
/// - 项目创建
/// - 项目查询
/// - 项目更新（整体替换）
/// - 项目删除
///
/// 找不到指定 `id` 的项目时统一返回 [`crate::DatabaseError::NotFound`]。
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 查询全部项目
    ///
    /// # 返回值
    /// 按 `id` 升序（即创建顺序）排列的项目列表，可能为空
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目内容，`id` 由存储层分配
    ///
    /// # 返回值
    /// 返回创建的项目信息
    async fn create_project(&self, project: ProjectData) -> DatabaseResult<ProjectInfo>;

    /// 根据 ID 获取项目信息
    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<ProjectInfo>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `project`: 新的项目内容，整体替换原有内容
    ///
    /// # 返回值
    /// 返回更新后的项目信息
    async fn update_project(&self, id: i64, project: ProjectData) -> DatabaseResult<ProjectInfo>;

    /// 删除项目
    ///
    /// 重复删除同一个 `id` 会再次返回 NotFound
    ///
    /// # 返回值
    /// 返回被删除的项目信息
    async fn delete_project(&self, id: i64) -> DatabaseResult<ProjectInfo>;
}
