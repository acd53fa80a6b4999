use super::{Form, FormData, FormErrors, optional_text};
use serde::Serialize;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundRequest {
    pub ref_code: String,
    pub message: String,
    pub email: String,
}

#[derive(Debug, Validate)]
struct RefundFields {
    #[validate(required(message = "This field is required."))]
    ref_code: Option<String>,
    #[validate(required(message = "This field is required."))]
    message: Option<String>,
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    email: Option<String>,
}

/// Refund request keyed by the order reference code.
pub struct RefundForm {
    data: FormData,
}

impl RefundForm {
    pub fn new(data: FormData) -> Self {
        Self { data }
    }
}

impl Form for RefundForm {
    type Output = RefundRequest;

    fn validate(&self) -> Result<RefundRequest, FormErrors> {
        let fields = RefundFields {
            ref_code: optional_text(&self.data, "ref_code"),
            message: optional_text(&self.data, "message"),
            email: optional_text(&self.data, "email"),
        };

        let mut errors = FormErrors::new();
        if let Err(e) = fields.validate() {
            errors.extend_from_validation(&e);
        }

        match (fields.ref_code, fields.message, fields.email) {
            (Some(ref_code), Some(message), Some(email)) if errors.is_empty() => {
                Ok(RefundRequest {
                    ref_code,
                    message,
                    email,
                })
            }
            _ => Err(errors),
        }
    }
}
