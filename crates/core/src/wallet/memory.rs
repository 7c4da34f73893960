//! In-memory ledger store with failure injection, for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, OwnedMutexGuard};
use wallet_shared::types::{TransactionId, UserId};

use super::error::StoreError;
use super::store::{LedgerScope, LedgerStore};
use super::types::{LedgerEntry, NewLedgerEntry, User};

/// Step at which the store reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Begin,
    LockUser,
    WriteBalance,
    AppendEntry,
    Commit,
}

/// Committed state of the store.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub users: BTreeMap<UserId, User>,
    pub entries: Vec<LedgerEntry>,
    next_entry_id: i64,
}

impl Ledger {
    pub fn balance_of(&self, id: i64) -> Decimal {
        self.users[&UserId::new(id)].balance
    }
}

pub fn user(id: i64, balance: Decimal) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(id),
        name: format!("user-{id}"),
        balance,
        created_at: now,
        updated_at: now,
    }
}

/// Store whose scopes are serialized by a single lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ledger: Arc<Mutex<Ledger>>,
    fail_point: Option<FailPoint>,
    scopes_opened: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn with_users(users: impl IntoIterator<Item = (i64, Decimal)>) -> Self {
        let ledger = Ledger {
            users: users
                .into_iter()
                .map(|(id, balance)| (UserId::new(id), user(id, balance)))
                .collect(),
            ..Ledger::default()
        };
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            ..Self::default()
        }
    }

    pub fn with_fail_point(mut self, point: FailPoint) -> Self {
        self.fail_point = Some(point);
        self
    }

    pub async fn snapshot(&self) -> Ledger {
        self.ledger.lock().await.clone()
    }

    pub fn scopes_opened(&self) -> usize {
        self.scopes_opened.load(Ordering::SeqCst)
    }

    fn check(fail_point: Option<FailPoint>, point: FailPoint) -> Result<(), StoreError> {
        if fail_point == Some(point) {
            return Err(StoreError(format!("injected failure at {point:?}")));
        }
        Ok(())
    }
}

pub struct MemoryScope {
    guard: OwnedMutexGuard<Ledger>,
    staged: Ledger,
    fail_point: Option<FailPoint>,
}

#[async_trait]
impl LedgerStore for MemoryStore {
    type Scope = MemoryScope;

    async fn begin(&self) -> Result<MemoryScope, StoreError> {
        self.scopes_opened.fetch_add(1, Ordering::SeqCst);
        Self::check(self.fail_point, FailPoint::Begin)?;

        let guard = Arc::clone(&self.ledger).lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryScope {
            guard,
            staged,
            fail_point: self.fail_point,
        })
    }
}

#[async_trait]
impl LedgerScope for MemoryScope {
    async fn lock_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError> {
        MemoryStore::check(self.fail_point, FailPoint::LockUser)?;
        Ok(self.staged.users.get(&user_id).cloned())
    }

    async fn write_balance(
        &mut self,
        user_id: UserId,
        balance: Decimal,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        MemoryStore::check(self.fail_point, FailPoint::WriteBalance)?;
        let user = self
            .staged
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError(format!("no user {user_id}")))?;
        user.balance = balance;
        user.updated_at = updated_at;
        Ok(())
    }

    async fn append_entry(&mut self, entry: NewLedgerEntry) -> Result<LedgerEntry, StoreError> {
        MemoryStore::check(self.fail_point, FailPoint::AppendEntry)?;
        self.staged.next_entry_id += 1;
        let stored = LedgerEntry {
            id: TransactionId::new(self.staged.next_entry_id),
            user_id: entry.user_id,
            amount: entry.amount.value(),
            transaction_type: entry.transaction_type,
            created_at: entry.created_at,
        };
        self.staged.entries.push(stored.clone());
        Ok(stored)
    }

    async fn commit(self) -> Result<(), StoreError> {
        MemoryStore::check(self.fail_point, FailPoint::Commit)?;
        let Self {
            mut guard, staged, ..
        } = self;
        *guard = staged;
        Ok(())
    }
}
