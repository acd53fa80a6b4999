use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
}

impl City {
    pub fn new(name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            country_code: country_code.into(),
            created_at: Utc::now(),
        }
    }
}
