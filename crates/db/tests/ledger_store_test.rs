//! Balance mutations through the `SeaORM` ledger store.

mod common;

use futures::future::join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::ConnectionTrait;
use std::sync::Arc;
use wallet_core::wallet::ledger_balance;
use wallet_core::{TransactionType, WalletError};
use wallet_db::{UserRepository, WalletQueries};
use wallet_shared::types::PageWindow;

use common::{amount, balance_of, seed_user, setup, wallet};

const ALL: PageWindow = PageWindow {
    offset: 0,
    limit: -1,
    page: 1,
};

#[tokio::test]
async fn test_receive_updates_balance_and_ledger_together() {
    let db = setup().await;
    let user = seed_user(&db, "alice", dec!(50)).await;

    let change = wallet(&db).receive(&user, amount(dec!(25))).await.unwrap();

    assert_eq!(change.user.balance, dec!(75));
    assert_eq!(balance_of(&db, &user).await, dec!(75));

    let (entries, total) = WalletQueries::new(db.clone())
        .list_transactions(user.id, &[], ALL)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(entries[0].id, change.entry.id);
    assert_eq!(entries[0].amount, dec!(25));
    assert_eq!(entries[0].transaction_type, TransactionType::Debit);
}

#[tokio::test]
async fn test_disburse_records_credit() {
    let db = setup().await;
    let user = seed_user(&db, "bob", dec!(50)).await;

    let change = wallet(&db).disburse(&user, amount(dec!(20.5))).await.unwrap();

    assert_eq!(change.user.balance, dec!(29.5));
    assert_eq!(change.entry.transaction_type, TransactionType::Credit);
    assert_eq!(balance_of(&db, &user).await, dec!(29.5));
}

#[tokio::test]
async fn test_insufficient_funds_writes_nothing() {
    let db = setup().await;
    let user = seed_user(&db, "carol", dec!(50)).await;

    let err = wallet(&db)
        .disburse(&user, amount(dec!(100)))
        .await
        .unwrap_err();

    assert!(matches!(err, WalletError::InsufficientFunds { .. }));
    assert_eq!(balance_of(&db, &user).await, dec!(50));
    let (entries, total) = WalletQueries::new(db.clone())
        .list_transactions(user.id, &[], ALL)
        .await
        .unwrap();
    assert!(entries.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_failed_ledger_insert_rolls_back_balance() {
    let db = setup().await;
    let user = seed_user(&db, "dave", dec!(50)).await;
    db.execute_unprepared("DROP TABLE transactions").await.unwrap();

    let err = wallet(&db).receive(&user, amount(dec!(25))).await.unwrap_err();

    assert!(matches!(err, WalletError::Storage(_)));
    assert_eq!(balance_of(&db, &user).await, dec!(50));
}

#[tokio::test]
async fn test_soft_deleted_user_cannot_be_mutated() {
    let db = setup().await;
    let user = seed_user(&db, "erin", dec!(50)).await;
    assert!(UserRepository::new(db.clone()).soft_delete(user.id).await.unwrap());

    let err = wallet(&db).receive(&user, amount(dec!(5))).await.unwrap_err();

    assert_eq!(err, WalletError::UserNotFound(user.id));
}

#[tokio::test]
async fn test_concurrent_disbursements_never_overdraw() {
    let db = setup().await;
    let user = seed_user(&db, "frank", dec!(50)).await;
    let service = Arc::new(wallet(&db));

    let attempts = (0..10).map(|_| {
        let service = Arc::clone(&service);
        let user = user.clone();
        async move { service.disburse(&user, amount(dec!(10))).await }
    });
    let outcomes = join_all(attempts).await;

    let succeeded = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(succeeded, 5);
    assert!(
        outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().err())
            .all(|err| matches!(err, WalletError::InsufficientFunds { .. }))
    );
    assert_eq!(balance_of(&db, &user).await, Decimal::ZERO);
}

#[tokio::test]
async fn test_balance_matches_ledger_after_mixed_operations() {
    let db = setup().await;
    let user = seed_user(&db, "grace", Decimal::ZERO).await;
    let service = wallet(&db);

    for (receive, value) in [
        (true, dec!(100)),
        (false, dec!(30.25)),
        (false, dec!(500)),
        (true, dec!(12.5)),
        (false, dec!(82.25)),
    ] {
        let current = WalletQueries::new(db.clone())
            .find_user(user.id)
            .await
            .unwrap()
            .unwrap();
        let outcome = if receive {
            service.receive(&current, amount(value)).await
        } else {
            service.disburse(&current, amount(value)).await
        };
        if let Err(err) = outcome {
            assert!(matches!(err, WalletError::InsufficientFunds { .. }));
        }
    }

    let (entries, _) = WalletQueries::new(db.clone())
        .list_transactions(user.id, &[], ALL)
        .await
        .unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(balance_of(&db, &user).await, ledger_balance(&entries));
    assert_eq!(balance_of(&db, &user).await, Decimal::ZERO);
}
