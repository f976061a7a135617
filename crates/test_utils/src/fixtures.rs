//! Pre-built test fixtures
//!
//! Ready-to-use test data for common value objects. Fixtures are consistent
//! and predictable so assertions can use literal expected values.

use core_kernel::{AccountNumber, Currency, Money};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard amount in the default currency
    pub fn cop_100() -> Money {
        Money::of(dec!(100.00)).unwrap()
    }

    /// A well-funded source balance
    pub fn cop_500() -> Money {
        Money::of(dec!(500.00)).unwrap()
    }

    /// A zero amount in the default currency
    pub fn cop_zero() -> Money {
        Money::zero_default()
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD).unwrap()
    }
}

/// Fixture for account-number test data
pub struct AccountNumberFixtures;

impl AccountNumberFixtures {
    /// A valid ten-digit number
    pub fn source() -> AccountNumber {
        AccountNumber::new("1111111111").unwrap()
    }

    /// A second, distinct valid number
    pub fn target() -> AccountNumber {
        AccountNumber::new("2222222222").unwrap()
    }

    /// A sixteen-digit number matching the generated format
    pub fn generated_shape() -> AccountNumber {
        AccountNumber::new("0000000000000042").unwrap()
    }
}
