use crate::domain::{
    city::{entity::City, repository::CityRepository},
    shared::errors::DomainError,
};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    async fn find_by_country(&self, country_code: &str) -> Result<Vec<City>, DomainError> {
        // Byte-order collation so the database agrees with the in-memory sort.
        sqlx::query_as::<_, City>(
            r#"SELECT id, name, country_code, created_at
               FROM cities
               WHERE country_code = $1
               ORDER BY name COLLATE "C" ASC"#,
        )
        .bind(country_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(database_error = %e, country_code, "City lookup failed");
            DomainError::InfrastructureError(e.to_string())
        })
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
