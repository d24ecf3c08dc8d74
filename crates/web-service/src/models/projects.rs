use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

/// 创建/更新项目的请求体
///
/// - 更新时为整体替换，没有传的可选字段会被清空
/// - 请求体里的 `id` 会被忽略，`id` 只能由服务端分配
/// - 其余未定义的字段原样保存，查询时原样返回
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[schema(example = "Dynamic Portfolio")]
    #[validate(length(min = 1, max = 255))]
    /// 项目标题
    pub title: String,

    #[schema(example = "An arcade-themed personal portfolio")]
    /// 项目描述
    pub description: Option<String>,

    #[validate(url)]
    /// 封面图片地址
    pub image_url: Option<String>,

    #[validate(url)]
    /// 代码仓库地址
    pub repo_url: Option<String>,

    #[validate(url)]
    /// 在线演示地址
    pub live_url: Option<String>,

    /// 其他字段
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl From<ProjectPayload> for database::ProjectData {
    fn from(payload: ProjectPayload) -> Self {
        let mut extra: serde_json::Map<String, Value> = payload.extra.into_iter().collect();
        extra.remove("id");

        Self {
            title: payload.title,
            description: payload.description,
            image_url: payload.image_url,
            repo_url: payload.repo_url,
            live_url: payload.live_url,
            extra,
        }
    }
}

/// 项目信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[schema(example = 15)]
    /// 项目ID
    pub id: i64,

    #[schema(example = "Dynamic Portfolio")]
    /// 项目标题
    pub title: String,

    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl From<database::ProjectInfo> for ProjectInfo {
    fn from(info: database::ProjectInfo) -> Self {
        Self {
            id: info.id,
            title: info.title,
            description: info.description,
            image_url: info.image_url,
            repo_url: info.repo_url,
            live_url: info.live_url,
            extra: info.extra.into_iter().collect(),
        }
    }
}
