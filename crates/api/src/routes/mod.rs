//! API route definitions.

use axum::{Router, response::Response};
use wallet_core::User;
use wallet_shared::AppError;
use wallet_shared::types::UserId;

use crate::{AppState, error::error_response};

pub mod health;
pub mod users;
pub mod wallets;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(users::routes())
        .merge(wallets::routes())
}

/// Loads the live user addressed by a raw path id.
///
/// A non-integer id or an unknown user becomes a 400 response.
async fn load_user(state: &AppState, raw_id: &str) -> Result<User, Response> {
    let Ok(id) = raw_id.parse::<UserId>() else {
        return Err(error_response(&AppError::InvalidInput(format!(
            "Invalid user id: {raw_id}"
        ))));
    };

    match state.queries.find_user(id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(error_response(&AppError::NotFound(format!(
            "User not found: {id}"
        )))),
        Err(e) => {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            Err(error_response(&AppError::Database(e.to_string())))
        }
    }
}
