//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{ProjectData, ProjectInfo};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::debug;

/// `projects` 表的一行数据
#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: Option<String>,
    image_url: Option<String>,
    repo_url: Option<String>,
    live_url: Option<String>,
    extra: Json<Map<String, Value>>,
}

impl From<ProjectRow> for ProjectInfo {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            repo_url: row.repo_url,
            live_url: row.live_url,
            extra: row.extra.0,
        }
    }
}

/// 项目仓库结构体（PostgreSQL）
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn project_not_found(id: i64) -> DatabaseError {
    DatabaseError::not_found(format!("project {id}"))
}

// 这里使用运行时检查的 `query_as` 而不是 `query_as!` 宏，编译时不需要连接数据库。
// 参数依然通过 `bind` 走预处理语句，不存在SQL注入问题。
#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询全部项目");

        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, image_url, repo_url, live_url, extra
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 共 {} 个项目", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_project(&self, project: ProjectData) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (title, description, image_url, repo_url, live_url, extra, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            RETURNING id, title, description, image_url, repo_url, live_url, extra;
            "#,
        )
        .bind(project.title)
        .bind(project.description)
        .bind(project.image_url)
        .bind(project.repo_url)
        .bind(project.live_url)
        .bind(Json(project.extra))
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 项目创建成功: id = {}", row.id);
        Ok(row.into())
    }

    async fn get_project_by_id(&self, id: i64) -> DatabaseResult<ProjectInfo> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, image_url, repo_url, live_url, extra
            FROM projects
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| project_not_found(id))?;

        Ok(row.into())
    }

    /// 更新项目信息
    ///
    /// 整体替换：所有列都直接使用新值，没有传的可选字段会被写成 `NULL`，
    /// `extra` 会被写成新的对象。
    async fn update_project(&self, id: i64, project: ProjectData) -> DatabaseResult<ProjectInfo> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, project);

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            UPDATE projects
            SET title = $2,
                description = $3,
                image_url = $4,
                repo_url = $5,
                live_url = $6,
                extra = $7,
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, image_url, repo_url, live_url, extra;
            "#,
        )
        .bind(id)
        .bind(project.title)
        .bind(project.description)
        .bind(project.image_url)
        .bind(project.repo_url)
        .bind(project.live_url)
        .bind(Json(project.extra))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| project_not_found(id))?;

        debug!("✅ 项目更新成功: id = {}", id);
        Ok(row.into())
    }

    async fn delete_project(&self, id: i64) -> DatabaseResult<ProjectInfo> {
        debug!("🗑️ 删除项目: {}", id);

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            DELETE FROM projects
            WHERE id = $1
            RETURNING id, title, description, image_url, repo_url, live_url, extra;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| project_not_found(id))?;

        debug!("✅ 项目删除成功: id = {}", id);
        Ok(row.into())
    }
}
