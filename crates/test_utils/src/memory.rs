//! In-memory port adapters
//!
//! Mock adapters for the domain's ports, backed by tokio locks so async
//! tests can share them across tasks. They model only the port contracts;
//! atomic multi-entity persistence is the production adapter's job.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::AccountNumber;
use domain_account::{
    Account, AccountEvent, AccountRepository, EventPublisher, Transaction, TransactionRepository,
};

/// Account store keyed by account number
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with the given accounts
    pub async fn seed(&self, accounts: impl IntoIterator<Item = Account>) {
        let mut map = self.accounts.write().await;
        for account in accounts {
            map.insert(account.account_number().as_str().to_string(), account);
        }
    }

    /// Returns the stored account for assertions
    pub async fn get(&self, account_number: &AccountNumber) -> Option<Account> {
        self.accounts
            .read()
            .await
            .get(account_number.as_str())
            .cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_number(&self, account_number: &AccountNumber) -> Option<Account> {
        self.accounts
            .read()
            .await
            .get(account_number.as_str())
            .cloned()
    }

    async fn save(&self, account: &Account) {
        self.accounts.write().await.insert(
            account.account_number().as_str().to_string(),
            account.clone(),
        );
    }
}

/// Append-only transaction store
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all saved transactions for assertions
    pub async fn all(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn save(&self, transaction: &Transaction) {
        self.transactions.write().await.push(transaction.clone());
    }
}

/// Publisher that records every published event for assertions
#[derive(Default)]
pub struct RecordingEventPublisher {
    published: RwLock<Vec<AccountEvent>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all events published so far
    pub async fn published(&self) -> Vec<AccountEvent> {
        self.published.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, events: Vec<AccountEvent>) {
        self.published.write().await.extend(events);
    }
}
