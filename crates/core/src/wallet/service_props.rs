//! Property tests for wallet balance/ledger consistency.

use proptest::prelude::*;
use rust_decimal::Decimal;

use wallet_shared::types::UserId;

use super::error::WalletError;
use super::memory::{Ledger, MemoryStore};
use super::service::WalletService;
use super::types::{PositiveAmount, TransactionType, ledger_balance};

#[derive(Debug, Clone, Copy)]
enum Op {
    Receive(Decimal),
    Disburse(Decimal),
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..50_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        amount_strategy().prop_map(Op::Receive),
        amount_strategy().prop_map(Op::Disburse),
    ]
}

fn run(ops: &[Op]) -> (Ledger, Vec<Result<(), WalletError>>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    runtime.block_on(async {
        let service = WalletService::new(MemoryStore::with_users([(1, Decimal::ZERO)]));
        let mut outcomes = Vec::with_capacity(ops.len());

        for op in ops {
            let current = service.store().snapshot().await.users[&UserId::new(1)].clone();
            let outcome = match *op {
                Op::Receive(value) => {
                    service.receive(&current, PositiveAmount::new(value).unwrap()).await
                }
                Op::Disburse(value) => {
                    service.disburse(&current, PositiveAmount::new(value).unwrap()).await
                }
            };
            outcomes.push(outcome.map(|_| ()));
        }

        (service.store().snapshot().await, outcomes)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance always equals the signed sum of the ledger and never goes
    /// negative, whatever mix of operations is applied.
    #[test]
    fn prop_balance_matches_ledger(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let (ledger, _) = run(&ops);

        let balance = ledger.balance_of(1);
        prop_assert_eq!(balance, ledger_balance(&ledger.entries));
        prop_assert!(balance >= Decimal::ZERO);
    }

    /// Each successful operation appends exactly one entry of the right type;
    /// each failed one appends nothing.
    #[test]
    fn prop_one_entry_per_successful_operation(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let (ledger, outcomes) = run(&ops);

        let expected: Vec<TransactionType> = ops
            .iter()
            .zip(&outcomes)
            .filter(|(_, outcome)| outcome.is_ok())
            .map(|(op, _)| match op {
                Op::Receive(_) => TransactionType::Debit,
                Op::Disburse(_) => TransactionType::Credit,
            })
            .collect();
        let actual: Vec<TransactionType> =
            ledger.entries.iter().map(|e| e.transaction_type).collect();

        prop_assert_eq!(actual, expected);
    }

    /// Disbursements fail only with insufficient funds; receives never fail.
    #[test]
    fn prop_only_overdrafts_are_rejected(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let (_, outcomes) = run(&ops);

        for (op, outcome) in ops.iter().zip(&outcomes) {
            match (op, outcome) {
                (_, Ok(())) => {}
                (Op::Disburse(_), Err(WalletError::InsufficientFunds { balance, requested })) => {
                    prop_assert!(balance < requested);
                }
                (op, Err(err)) => prop_assert!(false, "{op:?} failed with {err}"),
            }
        }
    }
}
