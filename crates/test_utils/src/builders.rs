//! Test data builders
//!
//! Builder for constructing account aggregates with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{AccountId, AccountNumber, Money};
use domain_account::{Account, AccountStatus};

use crate::fixtures::{AccountNumberFixtures, MoneyFixtures};

/// Builder for reconstituted test accounts
pub struct TestAccountBuilder {
    id: AccountId,
    account_number: AccountNumber,
    owner_name: String,
    balance: Money,
    status: AccountStatus,
    created_at: DateTime<Utc>,
    version: u32,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: AccountId::new(),
            account_number: AccountNumberFixtures::source(),
            owner_name: "Grace Hopper".to_string(),
            balance: MoneyFixtures::cop_100(),
            status: AccountStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            version: 0,
        }
    }

    /// Sets the account id
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = id;
        self
    }

    /// Sets the account number
    pub fn with_number(mut self, account_number: AccountNumber) -> Self {
        self.account_number = account_number;
        self
    }

    /// Sets the owner name
    pub fn with_owner(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = owner_name.into();
        self
    }

    /// Sets the balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Sets the lifecycle status
    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the persisted version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Builds the account via the reconstitution path (no events buffered)
    pub fn build(self) -> Account {
        Account::reconstitute(
            self.id,
            self.account_number,
            self.owner_name,
            self.balance,
            self.status,
            self.created_at,
            self.version,
        )
    }
}
