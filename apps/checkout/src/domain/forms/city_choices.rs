use super::FormData;
use crate::domain::city::{entity::City, repository::CityRepository};
use crate::domain::shared::errors::DomainError;
use tracing::debug;
use uuid::Uuid;

pub const COUNTRY_FIELD: &str = "country";

/// Cities selectable in the checkout city dropdown for one form instance.
///
/// Built once per form construction and never shared between instances. An unknown
/// country and a missing country both produce an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityChoices {
    country_code: Option<String>,
    cities: Vec<City>,
}

impl CityChoices {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the cities of `country_code`, or nothing when no country was resolved.
    ///
    /// Performs at most one repository lookup.
    pub async fn load(
        country_code: Option<&str>,
        cities: &dyn CityRepository,
    ) -> Result<Self, DomainError> {
        let Some(code) = country_code else {
            debug!("No country selected, city choices left empty");
            return Ok(Self::empty());
        };

        let mut found = cities.find_by_country(code).await?;
        found.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(country_code = code, count = found.len(), "Loaded city choices");

        Ok(Self {
            country_code: Some(code.to_string()),
            cities: found,
        })
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn names(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn find(&self, id: Uuid) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Picks the country driving the city dropdown: submitted data first, then the
/// initial value. Blank values count as absent.
pub fn resolve_country_code(data: Option<&FormData>, initial: &FormData) -> Option<String> {
    non_blank_country(data)
        .or_else(|| non_blank_country(Some(initial)))
        .map(str::to_string)
}

fn non_blank_country(source: Option<&FormData>) -> Option<&str> {
    source
        .and_then(|values| values.get(COUNTRY_FIELD))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
