use super::countries;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError, ValidationErrors};

lazy_static! {
    static ref COUNTRY_CODE_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z]{2}$").unwrap();
}

/// Assigned ISO 3166-1 alpha-2 country code, e.g. `PK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CountryCode {
    #[validate(regex(path = *COUNTRY_CODE_REGEX))]
    pub value: String,
}

impl CountryCode {
    pub fn new(value: String) -> Result<Self, ValidationErrors> {
        let code = Self { value };
        code.validate()?;
        if !countries::is_assigned(&code.value) {
            let mut errors = ValidationErrors::new();
            errors.add("value", ValidationError::new("unassigned_country"));
            return Err(errors);
        }
        Ok(code)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> Option<&'static str> {
        countries::country_name(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentOption {
    #[serde(rename = "S")]
    Stripe,
    #[serde(rename = "P")]
    PayPal,
}

impl PaymentOption {
    pub const ALL: [PaymentOption; 2] = [PaymentOption::Stripe, PaymentOption::PayPal];

    /// Value submitted by the radio group.
    pub fn code(self) -> &'static str {
        match self {
            Self::Stripe => "S",
            Self::PayPal => "P",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stripe => "Stripe",
            Self::PayPal => "PayPal",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.code() == code)
    }
}
