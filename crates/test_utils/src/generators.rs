//! Deterministic and property-based data generators
//!
//! `SequentialNumberGenerator` replaces the random account-number source in
//! tests so opened accounts get predictable numbers. The proptest strategies
//! cover the value-object input spaces.

use core_kernel::{AccountNumber, AccountNumberGenerator, Money};
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;

/// Deterministic account-number source: 16-digit numbers counting up from
/// the given seed
pub struct SequentialNumberGenerator {
    next: u64,
}

impl SequentialNumberGenerator {
    pub fn new(seed: u64) -> Self {
        Self { next: seed }
    }
}

impl Default for SequentialNumberGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl AccountNumberGenerator for SequentialNumberGenerator {
    fn generate(&mut self) -> AccountNumber {
        let number = AccountNumber::new(format!("{:016}", self.next))
            .expect("a zero-padded 16-digit number is always valid");
        self.next += 1;
        number
    }
}

/// A random but realistic owner name
pub fn owner_name() -> String {
    Name().fake()
}

/// Strategy over non-negative amounts in the default currency, up to ten
/// million units
pub fn money_amounts() -> impl Strategy<Value = Money> {
    (0u64..1_000_000_000u64).prop_map(|minor| Money::from_minor(minor, Money::DEFAULT_CURRENCY))
}

/// Strategy over strictly positive amounts in the default currency
pub fn positive_money_amounts() -> impl Strategy<Value = Money> {
    (1u64..1_000_000_000u64).prop_map(|minor| Money::from_minor(minor, Money::DEFAULT_CURRENCY))
}

/// Strategy over valid account numbers of every permitted length
pub fn account_numbers() -> impl Strategy<Value = AccountNumber> {
    proptest::string::string_regex("[0-9]{10,20}")
        .expect("valid regex")
        .prop_map(|digits| AccountNumber::new(digits).expect("digits in range are valid"))
}
