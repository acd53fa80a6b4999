use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use checkout::{
    config::Config,
    domain::{
        city::{entity::City, repository::CityRepository},
        shared::errors::DomainError,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

/// City store backed by a fixed list, counting lookups.
pub struct InMemoryCityRepository {
    cities: Vec<City>,
    lookups: AtomicUsize,
    healthy: bool,
}

impl InMemoryCityRepository {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            lookups: AtomicUsize::new(0),
            healthy: true,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            cities: Vec::new(),
            lookups: AtomicUsize::new(0),
            healthy: false,
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn find_by_country(&self, country_code: &str) -> Result<Vec<City>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if !self.healthy {
            return Err(DomainError::InfrastructureError("store offline".into()));
        }
        let mut found: Vec<City> = self
            .cities
            .iter()
            .filter(|c| c.country_code == country_code)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        if self.healthy {
            Ok(())
        } else {
            Err(DomainError::InfrastructureError("store offline".into()))
        }
    }
}

pub struct TestApp {
    pub app: Router,
    pub repo: Arc<InMemoryCityRepository>,
    pub cities: Vec<City>,
}

impl TestApp {
    pub fn city(&self, name: &str) -> &City {
        self.cities
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no seeded city named {}", name))
    }
}

fn build_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        ignore_missing_migrations: true,
        allowed_origins: Vec::new(),
        max_body_bytes: 64 * 1024,
    }
}

pub fn seeded_cities() -> Vec<City> {
    vec![
        City::new("Lahore", "PK"),
        City::new("Karachi", "PK"),
        City::new("Paris", "FR"),
    ]
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(InMemoryCityRepository::new(seeded_cities()))
}

pub fn spawn_app_with(repo: InMemoryCityRepository) -> TestApp {
    let cities = repo.cities.clone();
    let repo = Arc::new(repo);
    let state = AppState::new(build_config(), repo.clone());

    TestApp {
        app: create_router(state),
        repo,
        cities,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build GET request")
}

/// Form-urlencoded POST. Values must already be url-safe.
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("failed to build form request")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}
