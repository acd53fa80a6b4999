//! Checkout, coupon and refund forms.
//!
//! Each form takes the submitted field values as an explicit [`FormData`] map and
//! produces either typed cleaned data or a [`FormErrors`] map keyed by field name.
//! Widget hints (placeholders, CSS classes) are a rendering concern and live in
//! `presentation::http::widgets`.

pub mod checkout_form;
pub mod city_choices;
pub mod coupon_form;
pub mod errors;
pub mod refund_form;

use std::collections::HashMap;

pub use checkout_form::{CheckoutDetails, CheckoutForm};
pub use city_choices::{CityChoices, resolve_country_code};
pub use coupon_form::{CouponEntry, CouponForm};
pub use errors::FormErrors;
pub use refund_form::{RefundForm, RefundRequest};

/// Field name to raw string value, as posted by a browser or supplied as pre-fill.
pub type FormData = HashMap<String, String>;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_CITY_MESSAGE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// A bound form that can be cleaned into its typed output.
pub trait Form {
    type Output;

    fn validate(&self) -> Result<Self::Output, FormErrors>;
}

pub(crate) fn invalid_choice_message(value: &str) -> String {
    format!(
        "Select a valid choice. {} is not one of the available choices.",
        value
    )
}

/// Trimmed value of `field`, `None` when absent or blank.
pub(crate) fn optional_text(data: &FormData, field: &str) -> Option<String> {
    data.get(field)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Checkbox semantics: absent, empty, `false` and `0` are unchecked.
pub(crate) fn checkbox(data: &FormData, field: &str) -> bool {
    match data.get(field) {
        None => false,
        Some(value) => {
            let value = value.trim().to_ascii_lowercase();
            !(value.is_empty() || value == "false" || value == "0")
        }
    }
}
