use crate::domain::{
    checkout::value_objects::PaymentOption,
    city::entity::City,
    forms::{CheckoutDetails, CityChoices, CouponEntry, RefundRequest},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityChoice {
    pub id: Uuid,
    pub name: String,
}

impl From<&City> for CityChoice {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityChoicesResponse {
    pub country_code: Option<String>,
    pub cities: Vec<CityChoice>,
}

impl From<&CityChoices> for CityChoicesResponse {
    fn from(choices: &CityChoices) -> Self {
        Self {
            country_code: choices.country_code().map(str::to_string),
            cities: choices.cities().iter().map(CityChoice::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutConfirmation {
    pub street_address: String,
    pub apartment_address: Option<String>,
    pub country: String,
    pub city: CityChoice,
    pub zip: String,
    pub same_shipping_address: bool,
    pub save_info: bool,
    pub payment_option: PaymentOption,
}

impl From<CheckoutDetails> for CheckoutConfirmation {
    fn from(details: CheckoutDetails) -> Self {
        Self {
            street_address: details.street_address,
            apartment_address: details.apartment_address,
            country: details.country.value,
            city: CityChoice::from(&details.city),
            zip: details.zip,
            same_shipping_address: details.same_shipping_address,
            save_info: details.save_info,
            payment_option: details.payment_option,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CouponResponse {
    pub code: Option<String>,
}

impl From<CouponEntry> for CouponResponse {
    fn from(entry: CouponEntry) -> Self {
        Self { code: entry.code }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RefundReceipt {
    pub ref_code: String,
    pub email: String,
    pub message: String,
}

impl From<RefundRequest> for RefundReceipt {
    fn from(request: RefundRequest) -> Self {
        Self {
            ref_code: request.ref_code,
            email: request.email,
            message: request.message,
        }
    }
}
