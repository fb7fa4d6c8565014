//! Display formatting for minor-unit amounts.
//!
//! CRITICAL: Major-unit values are exact `Decimal`s, never floats.

use centum_shared::{Amount, Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// Formats amounts according to a currency descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    currency: &'a Currency,
}

impl<'a> Formatter<'a> {
    /// Creates a formatter for `currency`.
    #[must_use]
    pub const fn new(currency: &'a Currency) -> Self {
        Self { currency }
    }

    /// Renders `amount` using the currency template.
    ///
    /// ```
    /// use centum_core::currency::Formatter;
    /// use centum_shared::{Amount, Currency};
    ///
    /// let usd = Currency::new("USD", "$", "$1", ".", ",", 2);
    /// assert_eq!(Formatter::new(&usd).format(Amount::new(123_456_789)), "$1,234,567.89");
    /// ```
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        #[allow(clippy::cast_possible_truncation)]
        let fraction = self.currency.fraction() as usize;
        let mut digits = amount.value().unsigned_abs().to_string();

        // At least one integer digit before the fractional part.
        if digits.len() <= fraction {
            digits = format!("{}{digits}", "0".repeat(fraction - digits.len() + 1));
        }

        let (integer, minor) = digits.split_at(digits.len() - fraction);
        let mut number = group_thousands(integer, self.currency.thousand());
        if fraction > 0 {
            number.push_str(self.currency.decimal());
            number.push_str(minor);
        }

        let rendered = self
            .currency
            .template()
            .replacen('1', &number, 1)
            .replacen('$', self.currency.grapheme(), 1);

        if amount.is_negative() {
            format!("-{rendered}")
        } else {
            rendered
        }
    }

    /// Converts `amount` to major units (e.g., 150 cents to 1.50).
    ///
    /// # Errors
    ///
    /// Fails when the currency fraction exceeds the decimal scale limit.
    pub fn to_major_units(&self, amount: Amount) -> MoneyResult<Decimal> {
        Decimal::try_new(amount.value(), self.currency.fraction()).map_err(|_| {
            MoneyError::invalid(format!(
                "fraction {} exceeds decimal scale",
                self.currency.fraction()
            ))
        })
    }
}

fn group_thousands(integer: &str, separator: &str) -> String {
    if separator.is_empty() || integer.len() <= 3 {
        return integer.to_string();
    }

    let head = integer.len() % 3;
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 * separator.len());
    grouped.push_str(&integer[..head]);
    for (i, chunk) in integer.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            grouped.push_str(separator);
        }
        // Digits are ASCII.
        grouped.extend(chunk.iter().map(|&b| char::from(b)));
    }
    grouped
}
