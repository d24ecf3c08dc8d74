//! 接口测试公共工具
//!
//! 使用内存仓库构建完整的 [`Router`]，通过 [`tower::ServiceExt::oneshot`] 直接发送请求，不需要监听端口。

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use database::{MemoryProjectRepository, ProjectData, ProjectRepositoryTrait};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use web_service::{cors_layer, create_app_router, AppState};

pub const DEV_ORIGIN: &str = "http://localhost:5173";
pub const PROD_ORIGIN: &str = "https://portfolio.example.com";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// 响应体为空或者不是json时为 [`Value::Null`]
    pub json: Value,
}

/// 使用指定标题的项目初始化内存仓库，并创建路由
pub async fn app_with_titles(titles: &[&str]) -> Router {
    let repository = MemoryProjectRepository::new();
    for title in titles {
        repository.create_project(ProjectData::titled(*title)).await.unwrap();
    }

    let cors = cors_layer(&[DEV_ORIGIN.to_string(), PROD_ORIGIN.to_string()]).unwrap();
    create_app_router(AppState::new(Arc::new(repository)), cors)
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse { status, headers, json }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
