//! Router harness over an in-memory `SQLite` database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;
use wallet_db::migration::{Migrator, MigratorTrait};
use wallet_db::{UserRepository, connect};
use wallet_shared::{DatabaseConfig, PaginationConfig};

use crate::{AppState, create_router};

pub struct TestApp {
    pub db: DatabaseConnection,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            max_connections: 1,
            min_connections: 1,
            sqlx_logging: false,
            ..DatabaseConfig::new("sqlite::memory:")
        };
        let db = connect(&config).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let router = create_router(AppState::new(db.clone(), PaginationConfig::default()));
        Self { db, router }
    }

    pub async fn seed_user(&self, name: &str, balance: Decimal) -> i64 {
        UserRepository::new(self.db.clone())
            .create(name, balance)
            .await
            .unwrap()
            .id
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_amount(&self, uri: &str, amount: Value) -> (StatusCode, Value) {
        self.post_json(uri, &json!({ "amount": amount })).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

/// Reads a decimal serialized as a JSON string.
pub fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}
