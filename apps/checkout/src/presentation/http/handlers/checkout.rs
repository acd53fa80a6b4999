use axum::{
    Form, Json,
    extract::{Query, State, rejection::FormRejection},
};
use serde::Deserialize;

use crate::{
    application::checkout::dto::{CheckoutConfirmation, CityChoicesResponse},
    domain::forms::{Form as _, FormData},
    presentation::http::{
        errors::AppError,
        state::AppState,
        widgets::{FormSchema, checkout_schema},
    },
};

#[derive(Debug, Deserialize)]
pub struct CityChoicesQuery {
    pub country: Option<String>,
}

/// Cities for the dropdown once the shopper picks a country.
pub async fn list_city_choices(
    State(state): State<AppState>,
    Query(params): Query<CityChoicesQuery>,
) -> Result<Json<CityChoicesResponse>, AppError> {
    let response = state.checkout.city_choices(params.country.as_deref()).await?;
    Ok(Json(response))
}

/// Empty checkout form. Query parameters act as pre-fill values.
pub async fn get_checkout_form(
    State(state): State<AppState>,
    Query(initial): Query<FormData>,
) -> Result<Json<FormSchema>, AppError> {
    let form = state.checkout.form(None, &initial).await?;
    Ok(Json(checkout_schema(form.city_choices(), &initial)))
}

pub async fn submit_checkout(
    State(state): State<AppState>,
    Query(initial): Query<FormData>,
    body: Result<Form<FormData>, FormRejection>,
) -> Result<Json<CheckoutConfirmation>, AppError> {
    let Form(data) = body?;
    let form = state.checkout.form(Some(data), &initial).await?;
    let details = form.validate()?;

    tracing::info!(
        country = details.country.as_str(),
        city = %details.city.name,
        payment_option = details.payment_option.code(),
        "Checkout form accepted"
    );
    Ok(Json(CheckoutConfirmation::from(details)))
}
