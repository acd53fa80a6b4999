use axum::{Form, Json, extract::rejection::FormRejection};

use crate::{
    application::checkout::dto::RefundReceipt,
    domain::forms::{Form as _, FormData, RefundForm},
    presentation::http::{
        errors::AppError,
        widgets::{FormSchema, refund_schema},
    },
};

pub async fn get_refund_form() -> Json<FormSchema> {
    Json(refund_schema())
}

pub async fn request_refund(
    body: Result<Form<FormData>, FormRejection>,
) -> Result<Json<RefundReceipt>, AppError> {
    let Form(data) = body?;
    let request = RefundForm::new(data).validate()?;
    tracing::info!(ref_code = %request.ref_code, "Refund request accepted");
    Ok(Json(RefundReceipt::from(request)))
}
