use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{Error, app_state::TransactionState, transaction::TransactionId};

/// A route handler for deleting a transaction, responds with 204 and no body.
///
/// Responds with 404 if there was no transaction to delete.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<StatusCode, Error> {
    state.transaction_store.remove(transaction_id)?;
    tracing::debug!("Deleted transaction {transaction_id}");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        Error,
        app_state::TransactionState,
        transaction::{
            InMemoryTransactionStore, delete_endpoint::delete_transaction_endpoint,
        },
    };

    fn get_test_state() -> TransactionState {
        TransactionState {
            transaction_store: Arc::new(InMemoryTransactionStore::with_seed_data(date!(
                2025 - 10 - 05
            ))),
        }
    }

    #[tokio::test]
    async fn test_deletes_transaction() {
        let state = get_test_state();

        let status = delete_transaction_endpoint(State(state.clone()), Path(2)).await;

        assert_eq!(status, Ok(StatusCode::NO_CONTENT));
        assert_eq!(state.transaction_store.get(2), Err(Error::NotFound));
        assert_eq!(state.transaction_store.list(None).len(), 2);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let state = get_test_state();
        delete_transaction_endpoint(State(state.clone()), Path(2))
            .await
            .unwrap();

        let status = delete_transaction_endpoint(State(state.clone()), Path(2)).await;

        assert_eq!(status, Err(Error::NotFound));
        assert_eq!(state.transaction_store.list(None).len(), 2);
    }
}
