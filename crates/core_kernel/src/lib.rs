//! Core Kernel - Foundational types for the banking system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers and the account-number value object
//! - The Outcome container for error-as-value business results

pub mod error;
pub mod identifiers;
pub mod money;
pub mod outcome;

pub use error::CoreError;
pub use identifiers::{
    AccountId, AccountNumber, AccountNumberError, AccountNumberGenerator, RandomNumberGenerator,
    TransactionId,
};
pub use money::{Currency, Money, MoneyError};
pub use outcome::Outcome;
