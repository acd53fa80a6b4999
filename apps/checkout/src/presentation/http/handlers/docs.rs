use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Checkout Forms API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/checkout": { "post": { "summary": "Validate a checkout submission (form-urlencoded body, query string as pre-fill)" } },
            "/api/v1/checkout/form": { "get": { "summary": "Checkout form schema with city choices for the pre-filled country" } },
            "/api/v1/checkout/cities": { "get": { "summary": "Cities of a country, ordered by name" } },
            "/api/v1/coupons": { "post": { "summary": "Validate a coupon code" } },
            "/api/v1/coupons/form": { "get": { "summary": "Coupon form schema" } },
            "/api/v1/refunds": { "post": { "summary": "Validate a refund request" } },
            "/api/v1/refunds/form": { "get": { "summary": "Refund form schema" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
