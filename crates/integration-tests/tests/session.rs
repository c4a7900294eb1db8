//! Session lifecycle tests: issue, use, revoke.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use plantnet_api::config::Environment;
use plantnet_integration_tests::{test_app, test_state};

fn issue_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/jwt")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

fn set_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .expect("ascii cookie")
        .to_owned()
}

#[tokio::test]
async fn jwt_issues_http_only_year_long_cookie() {
    let app = test_app();
    let response = app
        .oneshot(issue_request(r#"{"email":"fern@example.com"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("token="), "cookie: {cookie}");
    assert!(cookie.contains("HttpOnly"), "cookie: {cookie}");
    assert!(cookie.contains("SameSite=Strict"), "cookie: {cookie}");
    // 365 days in seconds
    assert!(cookie.contains("Max-Age=31536000"), "cookie: {cookie}");
}

#[tokio::test]
async fn production_cookie_is_cross_site_and_secure() {
    let app = plantnet_api::app(test_state(Environment::Production));
    let response = app
        .oneshot(issue_request(r#"{"email":"fern@example.com"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = set_cookie(&response);
    assert!(cookie.contains("SameSite=None"), "cookie: {cookie}");
    assert!(cookie.contains("Secure"), "cookie: {cookie}");
}

#[tokio::test]
async fn jwt_rejects_identity_without_valid_email() {
    let app = test_app();
    let response = app
        .oneshot(issue_request(r#"{"email":"not-an-email"}"#))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn issued_cookie_passes_the_guard() {
    // With the store unreachable a guarded handler fails *after* the
    // guard; any status but 401 means the credential was accepted.
    let app = test_app();
    let response = app
        .clone()
        .oneshot(issue_request(r#"{"email":"fern@example.com"}"#))
        .await
        .expect("response");
    let cookie = set_cookie(&response);
    let token_pair = cookie.split(';').next().expect("cookie pair").to_owned();

    let guarded = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/users/role/fern%40example.com")
                .header(header::COOKIE, token_pair)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_ne!(guarded.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_expires_the_cookie_and_is_idempotent() {
    let app = test_app();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/logout")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = set_cookie(&response);
        assert!(cookie.starts_with("token=;"), "cookie: {cookie}");
        assert!(cookie.contains("Max-Age=0"), "cookie: {cookie}");
    }
}
