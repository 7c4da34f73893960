//! User routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::error;
use wallet_core::build_filter;
use wallet_shared::AppError;
use wallet_shared::types::PageResponse;

use super::load_user;
use crate::{
    AppState,
    error::error_response,
    response::{UserDetailResponse, UserResponse},
};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
        .route("/users/{id}", get(get_user))
}

/// Query parameters for listing users.
///
/// Values are kept raw; anything that does not parse is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// Case-insensitive name fragment.
    pub name: Option<String>,
    /// Minimum balance (integer).
    pub min_balance: Option<String>,
    /// Maximum balance (integer).
    pub max_balance: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<String>,
    /// Number of users per page.
    pub page_size: Option<String>,
}

/// GET `/users` - List users.
async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> impl IntoResponse {
    let mut filters = Vec::new();
    build_filter("name", query.name.as_deref().unwrap_or_default(), &mut filters);
    build_filter(
        "min_balance",
        query.min_balance.as_deref().unwrap_or_default(),
        &mut filters,
    );
    build_filter(
        "max_balance",
        query.max_balance.as_deref().unwrap_or_default(),
        &mut filters,
    );
    let window = state.page_window(query.page_size.as_deref(), query.page.as_deref());

    match state.queries.list_users(&filters, window).await {
        Ok((users, total)) => {
            let data = users.into_iter().map(UserResponse::from).collect();
            (StatusCode::OK, Json(PageResponse::new(data, window, total))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list users");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// GET `/users/{id}` - A user with their ten most recent transactions.
async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let user = match load_user(&state, &id).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match state.queries.compose_user_detail(user).await {
        Ok(detail) => (StatusCode::OK, Json(UserDetailResponse::from(detail))).into_response(),
        Err(e) => {
            error!(error = %e, user_id = %id, "Failed to load user detail");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
