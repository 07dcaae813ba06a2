//! Defines the endpoint for creating a new transaction.
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    app_state::TransactionState,
    transaction::{Transaction, TransactionData},
};

/// A route handler for creating a new transaction, responds with the stored transaction.
///
/// Any `id` in the request body is ignored, the store always assigns a fresh one.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(data): Json<TransactionData>,
) -> (StatusCode, Json<Transaction>) {
    let transaction = state.transaction_store.insert(data);
    tracing::debug!("Created transaction {}", transaction.id);

    (StatusCode::CREATED, Json(transaction))
}
