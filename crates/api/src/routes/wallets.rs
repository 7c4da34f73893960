//! Wallet routes: ledger listing, deposits, and withdrawals.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use wallet_core::{
    PositiveAmount, RequestValidator, TransactionType, WalletError, WalletTransactionRequest,
    build_filter,
};
use wallet_shared::AppError;
use wallet_shared::types::PageResponse;

use super::load_user;
use crate::{
    AppState,
    error::error_response,
    response::{TransactionResponse, UserDetailResponse},
};

/// Creates the wallet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallets/{id}", get(list_transactions))
        .route("/wallets/receive/{id}", post(receive))
        .route("/wallets/disburse/{id}", post(disburse))
}

/// Query parameters for listing a user's transactions.
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    /// `CREDIT` or `DEBIT`; anything else is ignored.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<String>,
    /// Number of transactions per page.
    pub page_size: Option<String>,
}

/// GET `/wallets/{id}` - List a user's transactions, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ListTransactionsQuery>,
) -> impl IntoResponse {
    let user = match load_user(&state, &id).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let mut filters = Vec::new();
    build_filter(
        "type",
        query.transaction_type.as_deref().unwrap_or_default(),
        &mut filters,
    );
    let window = state.page_window(query.page_size.as_deref(), query.page.as_deref());

    match state.queries.list_transactions(user.id, &filters, window).await {
        Ok((entries, total)) => {
            let data = entries.into_iter().map(TransactionResponse::from).collect();
            (StatusCode::OK, Json(PageResponse::new(data, window, total))).into_response()
        }
        Err(e) => {
            error!(error = %e, user_id = %user.id, "Failed to list transactions");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// POST `/wallets/receive/{id}` - Add money to a wallet.
async fn receive(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WalletTransactionRequest>, JsonRejection>,
) -> impl IntoResponse {
    apply_transaction(&state, &id, payload, TransactionType::Debit).await
}

/// POST `/wallets/disburse/{id}` - Take money out of a wallet.
async fn disburse(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WalletTransactionRequest>, JsonRejection>,
) -> impl IntoResponse {
    apply_transaction(&state, &id, payload, TransactionType::Credit).await
}

/// Runs a receive (`DEBIT`) or disburse (`CREDIT`) and responds with the
/// updated user detail.
///
/// The user is resolved before the body is validated.
async fn apply_transaction(
    state: &AppState,
    raw_id: &str,
    payload: Result<Json<WalletTransactionRequest>, JsonRejection>,
    transaction_type: TransactionType,
) -> Response {
    let user = match load_user(state, raw_id).await {
        Ok(user) => user,
        Err(response) => return response,
    };
    let amount = match validate_body(&state.validator, payload) {
        Ok(amount) => amount,
        Err(response) => return response,
    };

    let outcome = match transaction_type {
        TransactionType::Debit => state.wallet.receive(&user, amount).await,
        TransactionType::Credit => state.wallet.disburse(&user, amount).await,
    };

    let change = match outcome {
        Ok(change) => change,
        Err(err) => {
            match &err {
                WalletError::Storage(cause) => error!(
                    error = %cause,
                    user_id = %user.id,
                    %transaction_type,
                    "Wallet update failed"
                ),
                rejected => warn!(
                    reason = %rejected,
                    user_id = %user.id,
                    amount = %amount.value(),
                    %transaction_type,
                    "Wallet update rejected"
                ),
            }
            return error_response(&err.into());
        }
    };

    info!(
        user_id = %user.id,
        entry_id = %change.entry.id,
        amount = %amount.value(),
        balance = %change.user.balance,
        %transaction_type,
        "Wallet updated"
    );

    match state.queries.compose_user_detail(change.user).await {
        Ok(detail) => (StatusCode::CREATED, Json(UserDetailResponse::from(detail))).into_response(),
        Err(e) => {
            error!(error = %e, user_id = %user.id, "Failed to load user detail");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

fn validate_body(
    validator: &RequestValidator,
    payload: Result<Json<WalletTransactionRequest>, JsonRejection>,
) -> Result<PositiveAmount, Response> {
    let Json(request) = payload.map_err(|rejection| {
        error_response(&AppError::Unacceptable(json!(rejection.body_text())))
    })?;

    validator
        .validate(&request)
        .map_err(|failure| error_response(&failure.into()))
}
