//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::health::health_check;
use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_list_projects;
use crate::routes::projects::__path_update_project;
use crate::routes::projects::{create_project, delete_project, get_project, list_projects, update_project};
use crate::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod projects;

/// 导出 `/api/v1` 下的所有路由
///
/// ## **❗️注意事项：**
///
/// [`routes!`] 宏里的接口必须是同一个path，并且http方法不能重复，所以按path拆开定义：
///
/// ```rust,ignore
/// .routes(routes!(list_projects, create_project))                  // /projects
/// .routes(routes!(get_project, update_project, delete_project))    // /projects/{id}
/// ```
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_projects, create_project))
        .routes(routes!(get_project, update_project, delete_project))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档，用户可通过 `/docs` 访问文档网页地址
/// - 生成 `/api/v1` 业务路由，并只在这部分路由上启用 `cors`
/// - `/health` 健康检查
/// - 所有请求都经过 [`TraceLayer`] 记录日志
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState, cors: CorsLayer) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "作品集项目的增删改查接口")
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v1", routers(shared_state))
        .split_for_parts();

    // `layer` 只作用于已经注册的路由，因此后面合并的 `/health`、`/docs` 不会带跨域头
    router
        .layer(cors)
        .route("/health", get(health_check))
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
}
