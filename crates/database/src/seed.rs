//! 示例数据
//!
//! 新环境启动时，存储为空则写入作品集的示例项目，前端打开就能看到内容。

use crate::models::project::ProjectData;
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use tracing::info;

/// 作品集的示例项目，第一个固定为 "Dynamic Portfolio"
pub fn demo_projects() -> Vec<ProjectData> {
    vec![
        ProjectData {
            description: Some("An arcade-themed personal portfolio backed by a Rust REST API.".to_string()),
            ..ProjectData::titled("Dynamic Portfolio")
        },
        ProjectData {
            description: Some("Classic snake rebuilt for the browser, playable from the portfolio console.".to_string()),
            ..ProjectData::titled("Snake Arcade")
        },
        ProjectData {
            description: Some("Animated starfield background rendered on a canvas.".to_string()),
            ..ProjectData::titled("Spaceship Background")
        },
    ]
}

/// 存储为空时按顺序写入 `projects`
///
/// # 返回值
/// 实际写入的项目个数，存储非空时为 0
pub async fn seed_if_empty(repository: &dyn ProjectRepositoryTrait, projects: Vec<ProjectData>) -> DatabaseResult<usize> {
    if !repository.list_projects().await?.is_empty() {
        info!("📦 项目数据已存在，跳过示例数据");
        return Ok(0);
    }

    let count = projects.len();
    for project in projects {
        repository.create_project(project).await?;
    }

    info!("🌱 已写入 {} 个示例项目", count);
    Ok(count)
}
