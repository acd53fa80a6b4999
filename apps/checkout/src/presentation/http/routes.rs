use super::{
    handlers::{checkout, coupons, docs, health, refunds},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Checkout
        .route("/api/v1/checkout", post(checkout::submit_checkout))
        .route("/api/v1/checkout/form", get(checkout::get_checkout_form))
        .route("/api/v1/checkout/cities", get(checkout::list_city_choices))
        // Coupons
        .route("/api/v1/coupons", post(coupons::apply_coupon))
        .route("/api/v1/coupons/form", get(coupons::get_coupon_form))
        // Refunds
        .route("/api/v1/refunds", post(refunds::request_refund))
        .route("/api/v1/refunds/form", get(refunds::get_refund_form))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
