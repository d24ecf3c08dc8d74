//! 内存项目仓库
//!
//! 不依赖数据库的 [`ProjectRepositoryTrait`] 实现，进程退出后数据丢失。
//! 用于本地调试（`PROJECT_STORE=memory`）和接口测试。

use crate::models::project::{ProjectData, ProjectInfo};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct MemoryState {
    /// 已分配的最大 id，删除后也不会回收
    last_id: i64,
    projects: BTreeMap<i64, ProjectInfo>,
}

/// 项目仓库结构体（内存）
#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    state: RwLock<MemoryState>,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn project_not_found(id: i64) -> DatabaseError {
    DatabaseError::not_found(format!("project {id}"))
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryProjectRepository {
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        let state = self.state.read().await;
        Ok(state.projects.values().cloned().collect())
    }

    async fn create_project(&self, project: ProjectData) -> DatabaseResult<ProjectInfo> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let id = state.last_id;
        let info = ProjectInfo::from_data(id, project);
        state.projects.insert(id, info.clone());

        debug!("📝 内存仓库创建项目: id = {}", id);
        Ok(info)
    }

    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<ProjectInfo> {
        let state = self.state.read().await;
        state.projects.get(&id).cloned().ok_or_else(|| project_not_found(id))
    }

    async fn update_project(&self, id: i64, project: ProjectData) -> DatabaseResult<ProjectInfo> {
        let mut state = self.state.write().await;
        let slot = state.projects.get_mut(&id).ok_or_else(|| project_not_found(id))?;
        *slot = ProjectInfo::from_data(id, project);

        debug!("🔄 内存仓库更新项目: id = {}", id);
        Ok(slot.clone())
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<ProjectInfo> {
        let mut state = self.state.write().await;
        let removed = state.projects.remove(&id).ok_or_else(|| project_not_found(id))?;

        debug!("🗑️ 内存仓库删除项目: id = {}", id);
        Ok(removed)
    }
}
