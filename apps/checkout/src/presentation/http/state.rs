use crate::{
    application::checkout::use_case::CheckoutUseCase, config::Config,
    domain::city::repository::CityRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub city_repo: Arc<dyn CityRepository>,
    pub checkout: Arc<CheckoutUseCase>,
}

impl AppState {
    pub fn new(config: Config, city_repo: Arc<dyn CityRepository>) -> Self {
        Self {
            config,
            checkout: Arc::new(CheckoutUseCase::new(city_repo.clone())),
            city_repo,
        }
    }
}
