//! Rendering hints for the checkout, coupon and refund forms.
//!
//! The domain forms only know which values are acceptable. Element ids, CSS
//! classes and placeholder text are front-end concerns and are described here so
//! a client can draw the inputs. The `country` and `city` ids are fixed because the
//! storefront script wires the cascading dropdown through them.

use crate::domain::{
    checkout::{countries, value_objects::PaymentOption},
    forms::{CityChoices, FormData},
};
use serde::Serialize;

const TEXT_CLASS: &str = "form-control";
const SELECT_CLASS: &str = "custom-select d-block w-100";
const COUNTRY_BLANK_LABEL: &str = "(select country)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Textarea,
    Email,
    Select,
    Radio,
    Checkbox,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub input: InputKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    pub attrs: WidgetAttrs,
}

impl FieldSchema {
    fn new(name: &'static str, input: InputKind, required: bool) -> Self {
        Self {
            name,
            input,
            required,
            initial: None,
            choices: None,
            attrs: WidgetAttrs::default(),
        }
    }

    fn attrs(mut self, attrs: WidgetAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub form: &'static str,
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    fn new(form: &'static str, fields: Vec<FieldSchema>) -> Self {
        Self { form, fields }
    }

    /// Copies pre-fill values onto the matching fields.
    fn with_initial(mut self, initial: &FormData) -> Self {
        for field in &mut self.fields {
            field.initial = initial
                .get(field.name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn text_attrs(placeholder: Option<&'static str>) -> WidgetAttrs {
    WidgetAttrs {
        class: Some(TEXT_CLASS),
        placeholder,
        ..WidgetAttrs::default()
    }
}

fn select_attrs(id: &'static str) -> WidgetAttrs {
    WidgetAttrs {
        id: Some(id),
        class: Some(SELECT_CLASS),
        ..WidgetAttrs::default()
    }
}

pub fn checkout_schema(cities: &CityChoices, initial: &FormData) -> FormSchema {
    let city_choices = cities
        .cities()
        .iter()
        .map(|c| Choice {
            value: c.id.to_string(),
            label: c.name.clone(),
        })
        .collect();
    let country_choices = std::iter::once(Choice {
        value: String::new(),
        label: COUNTRY_BLANK_LABEL.to_string(),
    })
    .chain(countries::by_name().into_iter().map(|(code, name)| Choice {
        value: code.to_string(),
        label: name.to_string(),
    }))
    .collect();
    let payment_choices = PaymentOption::ALL
        .into_iter()
        .map(|option| Choice {
            value: option.code().to_string(),
            label: option.label().to_string(),
        })
        .collect();

    FormSchema::new(
        "checkout",
        vec![
            FieldSchema::new("street_address", InputKind::Text, true)
                .attrs(text_attrs(Some("1234 Main St"))),
            FieldSchema::new("apartment_address", InputKind::Text, false)
                .attrs(text_attrs(Some("Apartment or suite"))),
            FieldSchema::new("country", InputKind::Select, true)
                .attrs(select_attrs("country"))
                .choices(country_choices),
            FieldSchema::new("city", InputKind::Select, true)
                .attrs(select_attrs("city"))
                .choices(city_choices),
            FieldSchema::new("zip", InputKind::Text, true).attrs(text_attrs(None)),
            FieldSchema::new("same_shipping_address", InputKind::Checkbox, false),
            FieldSchema::new("save_info", InputKind::Checkbox, false),
            FieldSchema::new("payment_option", InputKind::Radio, true).choices(payment_choices),
        ],
    )
    .with_initial(initial)
}

pub fn coupon_schema() -> FormSchema {
    FormSchema::new(
        "coupon",
        vec![
            FieldSchema::new("code", InputKind::Text, false).attrs(WidgetAttrs {
                aria_label: Some("Coupon code"),
                ..text_attrs(Some("Enter coupon code"))
            }),
        ],
    )
}

pub fn refund_schema() -> FormSchema {
    FormSchema::new(
        "refund",
        vec![
            FieldSchema::new("ref_code", InputKind::Text, true)
                .attrs(text_attrs(Some("Order reference code"))),
            FieldSchema::new("message", InputKind::Textarea, true).attrs(WidgetAttrs {
                rows: Some(4),
                ..text_attrs(Some("Describe the issue"))
            }),
            FieldSchema::new("email", InputKind::Email, true)
                .attrs(text_attrs(Some("your@email.com"))),
        ],
    )
}
