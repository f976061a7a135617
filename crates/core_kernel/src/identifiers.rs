//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around UUIDs provides type safety and prevents
//! accidental mixing of different identifier types. Account numbers are a
//! separate, human-facing value object with their own validation rules.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(AccountId, "ACC");
define_id!(TransactionId, "TXN");

/// Errors raised when constructing an [`AccountNumber`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountNumberError {
    #[error("Invalid account number format, must be 10-20 digits: {0}")]
    InvalidFormat(String),
}

/// A bank account number: 10 to 20 ASCII digits
///
/// Uniqueness is not guaranteed by construction; it is enforced at the
/// persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    const MIN_LEN: usize = 10;
    const MAX_LEN: usize = 20;

    /// Validates and creates an account number; surrounding whitespace
    /// is trimmed before validation
    pub fn new(value: impl AsRef<str>) -> Result<Self, AccountNumberError> {
        let trimmed = value.as_ref().trim();
        let valid_length = (Self::MIN_LEN..=Self::MAX_LEN).contains(&trimmed.len());
        if !valid_length || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountNumberError::InvalidFormat(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = AccountNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = AccountNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountNumber> for String {
    fn from(number: AccountNumber) -> String {
        number.0
    }
}

/// Source of fresh account numbers
///
/// Injected wherever a new account is opened so tests can supply a
/// deterministic sequence instead of relying on process-wide random state.
pub trait AccountNumberGenerator {
    fn generate(&mut self) -> AccountNumber;
}

/// Generator producing random 16-digit account numbers
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNumberGenerator;

impl AccountNumberGenerator for RandomNumberGenerator {
    fn generate(&mut self) -> AccountNumber {
        let mut rng = rand::thread_rng();
        let number: u64 = rng.gen_range(0..10_000_000_000_000_000);
        AccountNumber::new(format!("{number:016}"))
            .expect("a zero-padded 16-digit number is always valid")
    }
}
