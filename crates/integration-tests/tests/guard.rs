//! Access-guard tests: guarded routes must reject before any store access.
//!
//! The router runs over a pool pointing at a port nothing listens on. A
//! handler that touched the store would come back 500/503; a clean 401
//! therefore proves the guard short-circuited first.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use plantnet_integration_tests::test_app;

/// Every guarded (method, path) pair on the surface.
const GUARDED_ROUTES: &[(&str, &str)] = &[
    ("PATCH", "/users/fern%40example.com"),
    ("GET", "/users/role/fern%40example.com"),
    ("GET", "/all-users/fern%40example.com"),
    ("POST", "/plants"),
    ("PATCH", "/plants/quantity/1"),
    ("POST", "/orders"),
    ("GET", "/customer-orders/fern%40example.com"),
    ("DELETE", "/orders/1"),
];

fn request(method: &str, path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method.parse::<Method>().expect("valid method"))
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from("{}")).expect("request")
}

#[tokio::test]
async fn guarded_routes_reject_missing_cookie() {
    let app = test_app();
    for (method, path) in GUARDED_ROUTES {
        let response = app
            .clone()
            .oneshot(request(method, path, None))
            .await
            .expect("response");
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {path} without a cookie"
        );
    }
}

#[tokio::test]
async fn guarded_routes_reject_invalid_cookie() {
    let app = test_app();
    for (method, path) in GUARDED_ROUTES {
        let response = app
            .clone()
            .oneshot(request(method, path, Some("token=not.a.real.token")))
            .await
            .expect("response");
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {path} with a garbage cookie"
        );
    }
}

#[tokio::test]
async fn open_routes_do_not_require_a_cookie() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("body");
    assert_eq!(&body[..], b"plantNet server is running");
}

#[tokio::test]
async fn malformed_plant_id_rejects_before_store_access() {
    // Path deserialization fails on a non-numeric id; with the store
    // unreachable, anything but a 4xx would mean we touched it.
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/plants/not-a-number")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
