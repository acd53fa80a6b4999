use super::helpers::{
    InMemoryCityRepository, expect_status, get, post_form, read_json, send, spawn_app,
    spawn_app_with,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;

fn city_names(payload: &Value) -> Vec<String> {
    payload["cities"]
        .as_array()
        .expect("cities should be an array")
        .iter()
        .map(|c| c["name"].as_str().expect("city name").to_string())
        .collect()
}

#[tokio::test]
async fn city_choices_follow_the_selected_country() {
    let app = spawn_app();

    let pk = expect_status(
        send(&app.app, get("/api/v1/checkout/cities?country=PK")).await,
        StatusCode::OK,
    )
    .await;
    let pk: Value = read_json(pk).await;
    assert_eq!(city_names(&pk), vec!["Karachi", "Lahore"]);
    assert_eq!(pk["country_code"], "PK");

    let fr: Value = read_json(send(&app.app, get("/api/v1/checkout/cities?country=FR")).await).await;
    assert_eq!(city_names(&fr), vec!["Paris"]);
}

#[tokio::test]
async fn blank_country_lists_no_cities_without_touching_the_store() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, get("/api/v1/checkout/cities?country=")).await,
        StatusCode::OK,
    )
    .await;
    let payload: Value = read_json(res).await;
    assert!(city_names(&payload).is_empty());
    assert_eq!(app.repo.lookups(), 0);
}

#[tokio::test]
async fn malformed_country_query_is_rejected() {
    let app = spawn_app();
    let res = send(&app.app, get("/api/v1/checkout/cities?country=Pakistan")).await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn form_schema_uses_initial_country_for_city_choices() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, get("/api/v1/checkout/form?country=FR")).await,
        StatusCode::OK,
    )
    .await;
    let schema: Value = read_json(res).await;
    let fields = schema["fields"].as_array().expect("fields array");
    let city = fields
        .iter()
        .find(|f| f["name"] == "city")
        .expect("city field");
    let labels: Vec<_> = city["choices"]
        .as_array()
        .expect("city choices")
        .iter()
        .map(|c| c["label"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["Paris"]);
    assert_eq!(app.repo.lookups(), 1);

    let country = fields
        .iter()
        .find(|f| f["name"] == "country")
        .expect("country field");
    let countries = country["choices"].as_array().expect("country choices");
    assert_eq!(countries[0]["label"], "(select country)");
    assert!(countries.iter().any(|c| c["value"] == "FR"));
    assert!(!countries.iter().any(|c| c["value"] == "ZZ"));
}

#[tokio::test]
async fn unassigned_country_is_rejected_on_submit() {
    let app = spawn_app();
    let karachi = app.city("Karachi").id.to_string();

    let req = post_form(
        "/api/v1/checkout",
        &[
            ("street_address", "1234+Main+St"),
            ("country", "ZZ"),
            ("city", karachi.as_str()),
            ("zip", "74000"),
            ("payment_option", "S"),
        ],
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
    let payload: Value = read_json(res).await;
    assert_eq!(
        payload["fields"]["country"][0],
        "Select a valid choice. ZZ is not one of the available choices."
    );
}

#[tokio::test]
async fn non_form_body_gets_json_error() {
    let app = spawn_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"country":"PK"}"#))
        .expect("failed to build json request");
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
    let payload: Value = read_json(res).await;
    assert!(payload["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn valid_checkout_is_confirmed() {
    let app = spawn_app();
    let karachi = app.city("Karachi").id.to_string();

    let req = post_form(
        "/api/v1/checkout",
        &[
            ("street_address", "1234+Main+St"),
            ("country", "PK"),
            ("city", karachi.as_str()),
            ("zip", "74000"),
            ("save_info", "on"),
            ("payment_option", "P"),
        ],
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;

    assert_eq!(payload["street_address"], "1234 Main St");
    assert_eq!(payload["city"]["name"], "Karachi");
    assert_eq!(payload["country"], "PK");
    assert_eq!(payload["payment_option"], "P");
    assert_eq!(payload["save_info"], true);
    assert_eq!(payload["same_shipping_address"], false);
    assert!(payload["apartment_address"].is_null());
}

#[tokio::test]
async fn submitted_country_overrides_prefilled_country() {
    let app = spawn_app();
    let paris = app.city("Paris").id.to_string();

    let req = post_form(
        "/api/v1/checkout?country=FR",
        &[
            ("street_address", "1+Rue+de+Rivoli"),
            ("country", "PK"),
            ("city", paris.as_str()),
            ("zip", "75001"),
            ("payment_option", "S"),
        ],
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
    let payload: Value = read_json(res).await;

    assert_eq!(payload["error"], "Form validation failed");
    assert_eq!(
        payload["fields"]["city"][0],
        "Select a valid choice. That choice is not one of the available choices."
    );
}

#[tokio::test]
async fn empty_checkout_reports_every_required_field() {
    let app = spawn_app();

    let res = expect_status(
        send(&app.app, post_form("/api/v1/checkout", &[])).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    let payload: Value = read_json(res).await;
    let fields = payload["fields"].as_object().expect("fields object");

    for name in ["street_address", "country", "city", "zip", "payment_option"] {
        assert_eq!(fields[name][0], "This field is required.", "field {}", name);
    }
    assert!(!fields.contains_key("apartment_address"));
}

#[tokio::test]
async fn store_failure_surfaces_as_server_error() {
    let app = spawn_app_with(InMemoryCityRepository::unhealthy());

    let res = send(&app.app, get("/api/v1/checkout/cities?country=PK")).await;
    let res = expect_status(res, StatusCode::INTERNAL_SERVER_ERROR).await;
    let payload: Value = read_json(res).await;
    assert_eq!(payload["error"], "Database operation failed");

    let health = send(&app.app, get("/health")).await;
    expect_status(health, StatusCode::SERVICE_UNAVAILABLE).await;
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));
}
