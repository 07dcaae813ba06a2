//! Defines the endpoint for listing transactions, optionally filtered by type.
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    app_state::TransactionState,
    transaction::{Transaction, TransactionType},
};

/// The name of the query parameter that filters transactions by type.
const TYPE_PARAM: &str = "type";

/// A route handler for listing transactions in the order they were created.
///
/// A missing or empty `type` lists every transaction. A `type` that does not
/// name a transaction type lists nothing. Repeated `type` parameters are
/// joined with commas, so they never name a single type.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Transaction>> {
    let transactions = match type_filter(&params).as_deref() {
        None | Some("") => state.transaction_store.list(None),
        Some(filter) => match TransactionType::from_filter(filter) {
            Some(type_) => state.transaction_store.list(Some(type_)),
            None => {
                tracing::debug!("No transaction type matches the filter {filter:?}");
                Vec::new()
            }
        },
    };

    Json(transactions)
}

/// Collect every `type` value in `params`, joined with commas.
fn type_filter(params: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == TYPE_PARAM)
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
