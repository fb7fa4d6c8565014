//! The `Money` value object.
//!
//! Pairs an `Amount` with a shared currency descriptor and delegates every
//! operation to the calculator and allocation utilities. Binary operations
//! check the currencies first.

use std::cmp::Ordering;
use std::sync::Arc;

use centum_shared::{Amount, Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::warn;

use super::allocation::AllocationUtil;
use super::calculator::Calculator;
use crate::currency::Formatter;

/// Monetary value: an amount of minor units in a currency.
///
/// Immutable. Cloning is cheap; the descriptor is reference counted and
/// compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Amount,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates a new Money instance.
    pub fn new(amount: impl Into<Amount>, currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    pub fn zero(currency: impl Into<Arc<Currency>>) -> Self {
        Self::new(Amount::ZERO, currency)
    }

    /// The amount in minor units.
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// The currency descriptor.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    fn with_amount(&self, amount: Amount) -> Self {
        Self {
            amount,
            currency: Arc::clone(&self.currency),
        }
    }

    /// Returns true if both values use the same currency.
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    fn assert_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            return Ok(());
        }
        warn!(
            expected = self.currency.code(),
            found = other.currency.code(),
            "currency mismatch"
        );
        Err(MoneyError::CurrencyMismatch {
            expected: self.currency.code().to_string(),
            found: other.currency.code().to_string(),
        })
    }

    /// Returns true if the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive.
    pub const fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Returns true if the amount is negative.
    pub const fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Orders two values of the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self == other`.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// `self > other`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// `self < other`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Absolute value.
    pub fn absolute(&self) -> Self {
        self.with_amount(Calculator::absolute(self.amount))
    }

    /// Negated absolute value.
    pub fn negative(&self) -> Self {
        self.with_amount(Calculator::negative(self.amount))
    }

    /// Sum of two values of the same currency.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.assert_same_currency(other)?;
        Ok(self.with_amount(Calculator::add(self.amount, other.amount)?))
    }

    /// Difference of two values of the same currency.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.assert_same_currency(other)?;
        Ok(self.with_amount(Calculator::subtract(self.amount, other.amount)?))
    }

    /// Scales the amount by an integer multiplier.
    pub fn multiply(&self, multiplier: i64) -> MoneyResult<Self> {
        Ok(self.with_amount(Calculator::multiply(self.amount, multiplier)?))
    }

    /// Rounds to a multiple of `10^fraction` minor units.
    ///
    /// For USD (fraction 2) this rounds to whole dollars.
    pub fn round(&self) -> MoneyResult<Self> {
        Ok(self.with_amount(Calculator::round(
            self.amount,
            self.currency.fraction(),
        )?))
    }

    /// Splits into `n` parts; leftover units go to the first parties.
    pub fn split(&self, n: i64) -> MoneyResult<Vec<Self>> {
        Ok(AllocationUtil::split(self.amount, n)?
            .into_iter()
            .map(|amount| self.with_amount(amount))
            .collect())
    }

    /// Allocates by ratios; leftover units go to the first parties.
    pub fn allocate(&self, ratios: &[u32]) -> MoneyResult<Vec<Self>> {
        Ok(AllocationUtil::allocate(self.amount, ratios)?
            .into_iter()
            .map(|amount| self.with_amount(amount))
            .collect())
    }

    /// Value in major units as an exact decimal (100 USD cents = 1.00).
    pub fn as_major_units(&self) -> MoneyResult<Decimal> {
        Formatter::new(&self.currency).to_major_units(self.amount)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Formatter::new(&self.currency).format(self.amount))
    }
}
