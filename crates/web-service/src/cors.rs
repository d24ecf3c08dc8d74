//! 跨域配置
//!
//! 只挂在 `/api` 路由上，`/health`、`/docs` 不返回跨域头。

use axum::http::{HeaderValue, Method};
use color_eyre::eyre::Context;
use color_eyre::Result;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// 浏览器缓存预检结果的时间
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(1800);

/// 根据来源白名单创建 [`CorsLayer`]
///
/// - 白名单之外的来源不会得到 `Access-Control-Allow-Origin`，由浏览器拦截
/// - 允许携带 cookie，因此请求头不能用 `*`，改为原样回显预检请求里的 `Access-Control-Request-Headers`
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin `{origin}`")))
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE))
}
