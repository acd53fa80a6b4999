use super::{
    CityChoices, Form, FormData, FormErrors, INVALID_CITY_MESSAGE, REQUIRED_MESSAGE, checkbox,
    city_choices::COUNTRY_FIELD, invalid_choice_message, optional_text, resolve_country_code,
};
use crate::domain::checkout::value_objects::{CountryCode, PaymentOption};
use crate::domain::city::{entity::City, repository::CityRepository};
use crate::domain::shared::errors::DomainError;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

pub const CITY_FIELD: &str = "city";
pub const PAYMENT_OPTION_FIELD: &str = "payment_option";

/// Cleaned checkout submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutDetails {
    pub street_address: String,
    pub apartment_address: Option<String>,
    pub country: CountryCode,
    pub city: City,
    pub zip: String,
    pub same_shipping_address: bool,
    pub save_info: bool,
    pub payment_option: PaymentOption,
}

#[derive(Debug, Validate)]
struct AddressFields {
    #[validate(required(message = "This field is required."))]
    street_address: Option<String>,
    #[validate(required(message = "This field is required."))]
    zip: Option<String>,
}

/// Address and payment form with a country-dependent city dropdown.
pub struct CheckoutForm {
    data: Option<FormData>,
    city_choices: CityChoices,
}

impl CheckoutForm {
    /// Builds the form and narrows the city choices to the selected country.
    ///
    /// `data` is the submitted mapping (`None` when rendering an empty form) and
    /// `initial` the pre-fill values. The country in `data` wins over `initial`.
    #[instrument(skip_all)]
    pub async fn new(
        data: Option<FormData>,
        initial: &FormData,
        cities: &dyn CityRepository,
    ) -> Result<Self, DomainError> {
        let country_code = resolve_country_code(data.as_ref(), initial);
        let city_choices = CityChoices::load(country_code.as_deref(), cities).await?;
        Ok(Self { data, city_choices })
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    pub fn city_choices(&self) -> &CityChoices {
        &self.city_choices
    }

    fn clean_country(data: &FormData, errors: &mut FormErrors) -> Option<CountryCode> {
        let Some(raw) = optional_text(data, COUNTRY_FIELD) else {
            errors.add(COUNTRY_FIELD, REQUIRED_MESSAGE);
            return None;
        };
        match CountryCode::new(raw.clone()) {
            Ok(code) => Some(code),
            Err(_) => {
                errors.add(COUNTRY_FIELD, invalid_choice_message(&raw));
                None
            }
        }
    }

    fn clean_city(&self, data: &FormData, errors: &mut FormErrors) -> Option<City> {
        let Some(raw) = optional_text(data, CITY_FIELD) else {
            errors.add(CITY_FIELD, REQUIRED_MESSAGE);
            return None;
        };
        let city = Uuid::parse_str(&raw)
            .ok()
            .and_then(|id| self.city_choices.find(id));
        if city.is_none() {
            errors.add(CITY_FIELD, INVALID_CITY_MESSAGE);
        }
        city.cloned()
    }

    /// Radio values are matched as posted, without trimming.
    fn clean_payment_option(data: &FormData, errors: &mut FormErrors) -> Option<PaymentOption> {
        let raw = data
            .get(PAYMENT_OPTION_FIELD)
            .map(String::as_str)
            .unwrap_or_default();
        if raw.is_empty() {
            errors.add(PAYMENT_OPTION_FIELD, REQUIRED_MESSAGE);
            return None;
        }
        let option = PaymentOption::from_code(raw);
        if option.is_none() {
            errors.add(PAYMENT_OPTION_FIELD, invalid_choice_message(raw));
        }
        option
    }
}

impl Form for CheckoutForm {
    type Output = CheckoutDetails;

    fn validate(&self) -> Result<CheckoutDetails, FormErrors> {
        let Some(data) = &self.data else {
            return Err(FormErrors::not_submitted());
        };

        let mut errors = FormErrors::new();
        let address = AddressFields {
            street_address: optional_text(data, "street_address"),
            zip: optional_text(data, "zip"),
        };
        if let Err(e) = address.validate() {
            errors.extend_from_validation(&e);
        }

        let country = Self::clean_country(data, &mut errors);
        let city = self.clean_city(data, &mut errors);
        let payment_option = Self::clean_payment_option(data, &mut errors);

        match (address.street_address, address.zip, country, city, payment_option) {
            (Some(street_address), Some(zip), Some(country), Some(city), Some(payment_option))
                if errors.is_empty() =>
            {
                Ok(CheckoutDetails {
                    street_address,
                    apartment_address: optional_text(data, "apartment_address"),
                    country,
                    city,
                    zip,
                    same_shipping_address: checkbox(data, "same_shipping_address"),
                    save_info: checkbox(data, "save_info"),
                    payment_option,
                })
            }
            _ => Err(errors),
        }
    }
}
