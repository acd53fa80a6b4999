use super::dto::CityChoicesResponse;
use crate::domain::{
    checkout::value_objects::CountryCode,
    city::repository::CityRepository,
    forms::{CheckoutForm, CityChoices, FormData},
    shared::errors::DomainError,
};
use std::sync::Arc;

pub struct CheckoutUseCase {
    repository: Arc<dyn CityRepository>,
}

impl CheckoutUseCase {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    /// Builds a checkout form for one request. Pass `None` as `data` to render an empty form.
    pub async fn form(
        &self,
        data: Option<FormData>,
        initial: &FormData,
    ) -> Result<CheckoutForm, DomainError> {
        CheckoutForm::new(data, initial, self.repository.as_ref()).await
    }

    /// City dropdown contents for `country`. A blank country yields no cities, a
    /// malformed one is rejected.
    pub async fn city_choices(
        &self,
        country: Option<&str>,
    ) -> Result<CityChoicesResponse, DomainError> {
        let country = country.map(str::trim).filter(|c| !c.is_empty());
        let choices = match country {
            None => CityChoices::empty(),
            Some(raw) => {
                let code = CountryCode::new(raw.to_string()).map_err(|_| {
                    DomainError::ValidationError(format!(
                        "country must be an ISO 3166-1 alpha-2 code, got {}",
                        raw
                    ))
                })?;
                CityChoices::load(Some(code.as_str()), self.repository.as_ref()).await?
            }
        };
        Ok(CityChoicesResponse::from(&choices))
    }
}
