use super::helpers::{expect_status, get, post_form, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

#[tokio::test]
async fn coupon_code_is_optional() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, post_form("/api/v1/coupons", &[("code", "SAVE10")])).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["code"], "SAVE10");

    let res = expect_status(
        send(&app.app, post_form("/api/v1/coupons", &[])).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;
    assert!(payload["code"].is_null());
}

#[tokio::test]
async fn refund_request_is_accepted() {
    let app = spawn_app();

    let req = post_form(
        "/api/v1/refunds",
        &[
            ("ref_code", "ORD-42"),
            ("message", "Arrived+broken"),
            ("email", "buyer%40example.com"),
        ],
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["ref_code"], "ORD-42");
    assert_eq!(payload["message"], "Arrived broken");
    assert_eq!(payload["email"], "buyer@example.com");
}

#[tokio::test]
async fn refund_with_bad_email_lists_field_error() {
    let app = spawn_app();

    let req = post_form(
        "/api/v1/refunds",
        &[
            ("ref_code", "ORD-42"),
            ("message", "Arrived+broken"),
            ("email", "nope"),
        ],
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["fields"]["email"][0], "Enter a valid email address.");
    assert!(payload["fields"].get("ref_code").is_none());
}

#[tokio::test]
async fn form_schemas_are_served() {
    let app = spawn_app();

    let coupon: Value = read_json(
        expect_status(send(&app.app, get("/api/v1/coupons/form")).await, StatusCode::OK).await,
    )
    .await;
    assert_eq!(coupon["form"], "coupon");

    let refund: Value = read_json(
        expect_status(send(&app.app, get("/api/v1/refunds/form")).await, StatusCode::OK).await,
    )
    .await;
    assert_eq!(refund["fields"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn missing_content_type_gets_json_error() {
    let app = spawn_app();

    for uri in ["/api/v1/coupons", "/api/v1/refunds"] {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from("code=SAVE10"))
            .expect("failed to build request");
        let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
        let payload: Value = read_json(res).await;
        assert!(payload["error"].is_string(), "uri {}", uri);
    }
}
