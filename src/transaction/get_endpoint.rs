use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{Transaction, TransactionId},
};

/// A route handler for getting a transaction by its ID.
///
/// Responds with 404 if the transaction does not exist or has been deleted.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    state.transaction_store.get(transaction_id).map(Json)
}
