//! 项目相关接口
//!
//! 所有接口都挂在 `/api/v1` 下，仓库层的错误原样交给 [`AppError`] 转换为http状态码：
//!
//! | 错误 | 状态码 |
//! |---|---|
//! | 请求体解析/校验失败 | 400 |
//! | 项目不存在 | 404 |
//! | 存储不可用 | 500 |

use crate::models::err::AppError;
use crate::models::json::ValidatedJson;
use crate::models::projects::{ProjectInfo, ProjectPayload};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 查询全部项目
///
/// 按创建顺序返回，没有项目时返回空数组。
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects in creation order", body = Vec<ProjectInfo>),
        (status = 500, description = "Project store unavailable")
    ),
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectInfo>>, AppError> {
    debug!("🔍 查询全部项目");

    let projects = state.project_repository.list_projects().await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，`id` 由服务端分配。
///
/// 通过 [`ValidatedJson`] 提取请求体：json 解析失败或者字段校验失败都会直接返回400。
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Created project", body = ProjectInfo),
        (status = 400, description = "Malformed or invalid body")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(project): ValidatedJson<ProjectPayload>,
) -> Result<(StatusCode, Json<ProjectInfo>), AppError> {
    debug!("Creating project {:#?}", project);

    let project = state.project_repository.create_project(project.into()).await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// 查询指定项目信息
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = ProjectInfo),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(State(state): State<AppState>, Path(project_id): Path<i64>) -> Result<Json<ProjectInfo>, AppError> {
    debug!("Getting project id {:#?}", project_id);

    let project = state.project_repository.get_project_by_id(project_id).await?;

    Ok(Json(project.into()))
}

/// 更新项目信息
///
/// 使用 [`ProjectPayload`] 整体替换指定 `id` 的项目。
#[utoipa::path(put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project id")),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Updated project", body = ProjectInfo),
        (status = 400, description = "Malformed or invalid body"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    ValidatedJson(info): ValidatedJson<ProjectPayload>,
) -> Result<Json<ProjectInfo>, AppError> {
    debug!("Updating project {} with {:#?}", project_id, info);

    let project = state.project_repository.update_project(project_id, info.into()).await?;

    Ok(Json(project.into()))
}

/// 删除指定的项目
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(State(state): State<AppState>, Path(project_id): Path<i64>) -> Result<StatusCode, AppError> {
    debug!("delete project {:#?}", project_id);

    state.project_repository.delete_project(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
