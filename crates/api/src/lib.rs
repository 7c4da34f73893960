//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for users and wallets
//! - Response types
//! - Error-to-response mapping

pub mod error;
pub mod response;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use wallet_core::{RequestValidator, WalletService};
use wallet_db::{SeaLedgerStore, WalletQueries};
use wallet_shared::PaginationConfig;
use wallet_shared::types::{PageWindow, resolve_pagination};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Balance mutations over the ledger store.
    pub wallet: Arc<WalletService<SeaLedgerStore>>,
    /// Read-side queries for users and ledger entries.
    pub queries: WalletQueries,
    /// Validator for receive/disburse bodies.
    pub validator: Arc<RequestValidator>,
    /// Default page and page size for list endpoints.
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Builds the state around a connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection, pagination: PaginationConfig) -> Self {
        let wallet = WalletService::new(SeaLedgerStore::new(db.clone()));
        let queries = WalletQueries::new(db.clone());
        Self {
            db: Arc::new(db),
            wallet: Arc::new(wallet),
            queries,
            validator: Arc::new(RequestValidator::default()),
            pagination,
        }
    }

    /// Resolves raw `page_size` / `page` query values against the defaults.
    #[must_use]
    pub fn page_window(&self, page_size: Option<&str>, page: Option<&str>) -> PageWindow {
        resolve_pagination(
            page_size.unwrap_or_default(),
            self.pagination.default_page_size,
            page.unwrap_or_default(),
            self.pagination.default_page,
        )
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
