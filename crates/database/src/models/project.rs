//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use serde_json::{Map, Value};

/// 项目信息结构体
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInfo {
    /// 由存储层分配，创建后不再变化
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    /// 未建模的字段，原样保存，原样返回
    pub extra: Map<String, Value>,
}

impl ProjectInfo {
    /// 使用指定 `id` 和项目内容组装项目信息
    pub fn from_data(id: i64, data: ProjectData) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            repo_url: data.repo_url,
            live_url: data.live_url,
            extra: data.extra,
        }
    }
}

/// 项目内容（不含 `id`）
///
/// 创建和更新共用：更新是整体替换，没有传的字段会被清空。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectData {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub extra: Map<String, Value>,
}

impl ProjectData {
    /// 只有标题的项目
    pub fn titled<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
