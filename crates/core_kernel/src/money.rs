//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//!
//! A `Money` value is never negative: construction rejects negative amounts,
//! so a balance can only go below zero through a bug, never through arithmetic
//! on validated values.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    COP,
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    CAD,
    AUD,
    MXN,
    BRL,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP => "COL$",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::MXN => "MX$",
            Currency::BRL => "R$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::MXN => "MXN",
            Currency::BRL => "BRL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money construction or checked arithmetic
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),
}

/// A non-negative monetary amount with associated currency
///
/// Amounts are normalized at construction to the currency's decimal places
/// using half-up rounding, so two `Money` values built from `1.005` and
/// `1.01` compare equal.
///
/// Arithmetic between differing currencies is a caller bug and panics
/// immediately; use [`Money::checked_add`] / [`Money::checked_sub`] at
/// boundaries where the currencies are not already known to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// The currency used when none is specified
    pub const DEFAULT_CURRENCY: Currency = Currency::COP;

    /// Creates a new Money value, rejecting negative amounts
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::NegativeAmount(amount));
        }
        Ok(Self {
            amount: amount.round_dp_with_strategy(
                currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency,
        })
    }

    /// Creates a Money value in the default currency
    pub fn of(amount: Decimal) -> Result<Self, MoneyError> {
        Self::new(amount, Self::DEFAULT_CURRENCY)
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: u64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self {
            amount: Decimal::from(minor_units) / divisor,
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Creates a zero amount in the default currency
    pub fn zero_default() -> Self {
        Self::zero(Self::DEFAULT_CURRENCY)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative; always false for a
    /// constructed value, kept so callers can state the invariant
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }

    /// Checked subtraction that returns an error on currency mismatch or
    /// a negative difference
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        let diff = self.amount - other.amount;
        if diff.is_sign_negative() && !diff.is_zero() {
            return Err(MoneyError::NegativeAmount(diff));
        }
        Ok(Self {
            amount: diff,
            currency: self.currency,
        })
    }

    /// Returns true if this amount is strictly greater than the other
    ///
    /// # Panics
    ///
    /// Panics on currency mismatch.
    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.assert_same_currency(other);
        self.amount > other.amount
    }

    /// Returns true if this amount is greater than or equal to the other
    ///
    /// # Panics
    ///
    /// Panics on currency mismatch.
    pub fn is_greater_than_or_equal(&self, other: &Money) -> bool {
        self.assert_same_currency(other);
        self.amount >= other.amount
    }

    /// Returns true if this amount is strictly less than the other
    ///
    /// # Panics
    ///
    /// Panics on currency mismatch.
    pub fn is_less_than(&self, other: &Money) -> bool {
        self.assert_same_currency(other);
        self.amount < other.amount
    }

    fn assert_same_currency(&self, other: &Money) {
        assert_eq!(
            self.currency, other.currency,
            "Currency mismatch: {} vs {}",
            self.currency, other.currency
        );
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places() as usize;
        write!(f, "{:.dp$} {}", self.amount, self.currency, dp = dp)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Invalid subtraction in Money::sub")
    }
}
