//! Account aggregate root
//!
//! The account is the unit of consistency for balance changes. All
//! mutations go through [`Account::debit`] and [`Account::credit`]; no other
//! code path may touch the balance, which is how the non-negativity
//! invariant is enforced with a single funds-sufficiency checkpoint.
//!
//! # Invariants
//!
//! - The balance is never negative; `debit` rejects anything the balance
//!   cannot cover.
//! - Identifier, account number, and owner name are immutable for the
//!   lifetime of the account.
//! - Domain events are drained exactly once via [`Account::take_events`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, AccountNumber, AccountNumberGenerator, Money, Outcome};

use crate::error::{AccountError, TransferError};
use crate::events::AccountEvent;

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// Aggregate root for a bank account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    account_number: AccountNumber,
    owner_name: String,
    balance: Money,
    status: AccountStatus,
    created_at: DateTime<Utc>,
    /// Bumped on every mutation; the persistence boundary uses it for an
    /// optimistic compare-and-swap, which is what makes concurrent
    /// transfers against the same account detectable
    version: u32,
    /// Domain events to be published
    #[serde(skip)]
    events: Vec<AccountEvent>,
}

impl Account {
    /// Opens a new account with a fresh identity and account number
    ///
    /// A missing initial balance defaults to zero in the default currency.
    /// Buffers an [`AccountEvent::AccountCreated`] carrying a snapshot of
    /// the opening state.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::BlankOwnerName`] if the owner name is empty
    /// or whitespace only.
    pub fn open(
        owner_name: impl Into<String>,
        initial_balance: Option<Money>,
        numbers: &mut dyn AccountNumberGenerator,
    ) -> Result<Self, AccountError> {
        let owner_name = owner_name.into();
        let owner_name = owner_name.trim();
        if owner_name.is_empty() {
            return Err(AccountError::BlankOwnerName);
        }

        let balance = initial_balance.unwrap_or_else(Money::zero_default);
        let mut account = Self {
            id: AccountId::new(),
            account_number: numbers.generate(),
            owner_name: owner_name.to_string(),
            balance,
            status: AccountStatus::Active,
            created_at: Utc::now(),
            version: 0,
            events: Vec::new(),
        };

        account.events.push(AccountEvent::AccountCreated {
            account_id: account.id,
            account_number: account.account_number.clone(),
            owner_name: account.owner_name.clone(),
            initial_balance: account.balance,
            occurred_on: Utc::now(),
        });

        Ok(account)
    }

    /// Rebuilds an account from already-validated persisted state
    ///
    /// No validation is re-run and no event is buffered; this is the load
    /// path, never the creation path.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AccountId,
        account_number: AccountNumber,
        owner_name: String,
        balance: Money,
        status: AccountStatus,
        created_at: DateTime<Utc>,
        version: u32,
    ) -> Self {
        Self {
            id,
            account_number,
            owner_name,
            balance,
            status,
            created_at,
            version,
            events: Vec::new(),
        }
    }

    /// Withdraws the amount from the balance
    ///
    /// The single funds-sufficiency checkpoint in the system. Returns the
    /// new balance on success; a non-positive amount fails with
    /// [`TransferError::InvalidAmount`] and an uncovered amount with
    /// [`TransferError::InsufficientFunds`] carrying both the available and
    /// requested amounts.
    pub fn debit(&mut self, amount: Money) -> Outcome<Money, TransferError> {
        if !amount.is_positive() {
            return Outcome::failure(TransferError::invalid_amount(
                "Debit amount must be positive",
            ));
        }

        if !self.has_sufficient_funds(&amount) {
            return Outcome::failure(TransferError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }

        self.balance = self.balance - amount;
        self.version += 1;
        Outcome::success(self.balance)
    }

    /// Deposits the amount into the balance unconditionally
    ///
    /// There is no upper bound. A non-positive amount is a bug in the
    /// caller, not a business outcome, so it fails the precondition assert
    /// instead of producing a [`TransferError`].
    ///
    /// # Panics
    ///
    /// Panics if the amount is not strictly positive.
    pub fn credit(&mut self, amount: Money) {
        assert!(
            amount.is_positive(),
            "Credit amount must be positive, got {amount}"
        );
        self.balance = self.balance + amount;
        self.version += 1;
    }

    /// Whether the balance covers the given amount (`>=`, so an exact
    /// match succeeds)
    pub fn has_sufficient_funds(&self, amount: &Money) -> bool {
        self.balance.is_greater_than_or_equal(amount)
    }

    /// Returns accumulated domain events and clears the buffer
    pub fn take_events(&mut self) -> Vec<AccountEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view of the buffered events, leaving them in place
    pub fn events(&self) -> &[AccountEvent] {
        &self.events
    }

    pub(crate) fn record_event(&mut self, event: AccountEvent) {
        self.events.push(event);
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

/// Entity identity: two accounts are the same aggregate when their ids match
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}
