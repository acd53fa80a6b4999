use axum::{Form, Json, extract::rejection::FormRejection};

use crate::{
    application::checkout::dto::CouponResponse,
    domain::forms::{CouponForm, Form as _, FormData},
    presentation::http::{
        errors::AppError,
        widgets::{FormSchema, coupon_schema},
    },
};

pub async fn get_coupon_form() -> Json<FormSchema> {
    Json(coupon_schema())
}

pub async fn apply_coupon(
    body: Result<Form<FormData>, FormRejection>,
) -> Result<Json<CouponResponse>, AppError> {
    let Form(data) = body?;
    let entry = CouponForm::new(data).validate()?;
    tracing::debug!(has_code = entry.code.is_some(), "Coupon form accepted");
    Ok(Json(CouponResponse::from(entry)))
}
