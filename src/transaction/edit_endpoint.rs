use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    app_state::TransactionState,
    transaction::{Transaction, TransactionData, TransactionId},
};

/// A route handler for replacing the type, amount, description and date of a transaction.
///
/// The transaction keeps its ID and its position in the store. Responds with
/// 404 and leaves the store untouched if the transaction does not exist.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    state
        .transaction_store
        .replace(transaction_id, data)
        .inspect_err(|_| {
            tracing::debug!("Could not update transaction {transaction_id}: not found");
        })
        .map(Json)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::{
        Json,
        extract::{Path, State},
    };
    use time::macros::date;

    use crate::{
        Error,
        app_state::TransactionState,
        transaction::{
            InMemoryTransactionStore, Transaction, TransactionData,
            TransactionType, edit_endpoint::edit_transaction_endpoint,
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
    async fn can_update_transaction() {
        let state = get_test_state();
        let want_transaction = Transaction {
            id: 3,
            type_: TransactionType::Income,
            amount: 3.21,
            description: "foo".to_owned(),
            date: date!(2025 - 10 - 28),
        };
        let data = TransactionData::new(
            want_transaction.type_,
            want_transaction.amount,
            &want_transaction.description,
            want_transaction.date,
        );

        let response = edit_transaction_endpoint(State(state.clone()), Path(3), Json(data)).await;

        assert_eq!(response.map(|json| json.0), Ok(want_transaction.clone()));
        assert_eq!(state.transaction_store.get(3), Ok(want_transaction));
    }

    #[tokio::test]
    async fn update_missing_transaction_is_not_found() {
        let state = get_test_state();
        let before = state.transaction_store.list(None);
        let data = TransactionData::new(
            TransactionType::Expense,
            1.0,
            "nothing",
            date!(2025 - 10 - 28),
        );

        let response = edit_transaction_endpoint(State(state.clone()), Path(42), Json(data)).await;

        assert_eq!(response.map(|json| json.0), Err(Error::NotFound));
        assert_eq!(state.transaction_store.list(None), before);
    }
}
