use super::entity::City;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

/// Read-only access to the cities backing the checkout city dropdown.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Cities whose `country_code` equals `country_code` exactly, ordered by name ascending.
    async fn find_by_country(&self, country_code: &str) -> Result<Vec<City>, DomainError>;

    /// Connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), DomainError>;
}
