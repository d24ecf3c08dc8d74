//! 跨域策略测试

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{app_with_titles, send, DEV_ORIGIN, PROD_ORIGIN};

fn get_with_origin(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

fn preflight(uri: &str, origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-requested-with")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn allowed_origins_get_cors_headers() {
    let app = app_with_titles(&["Dynamic Portfolio"]).await;

    for origin in [DEV_ORIGIN, PROD_ORIGIN] {
        let response = send(&app, get_with_origin("/api/v1/projects", origin)).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), origin);
        assert_eq!(response.headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
    }
}

#[tokio::test]
async fn unknown_origin_gets_no_cors_headers() {
    let app = app_with_titles(&["Dynamic Portfolio"]).await;

    let response = send(&app, get_with_origin("/api/v1/projects", "https://evil.example.org")).await;

    // 服务端照常处理，由浏览器根据缺失的跨域头拦截
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn preflight_allows_configured_methods_and_mirrors_headers() {
    let app = app_with_titles(&["Dynamic Portfolio"]).await;

    let response = send(&app, preflight("/api/v1/projects/1", DEV_ORIGIN, "PUT")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), DEV_ORIGIN);

    let methods = response.headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap().to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "content-type,x-requested-with"
    );
}

#[tokio::test]
async fn preflight_from_unknown_origin_is_not_allowed() {
    let app = app_with_titles(&[]).await;

    let response = send(&app, preflight("/api/v1/projects", "https://evil.example.org", "POST")).await;

    assert!(response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn routes_outside_api_have_no_cors_headers() {
    let app = app_with_titles(&[]).await;

    let response = send(&app, get_with_origin("/health", DEV_ORIGIN)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
