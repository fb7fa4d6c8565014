//! Currency lookup and registration.
//!
//! A registry is an ordinary value. Build it once (defaults, config, custom
//! registrations), then share it immutably, e.g. behind an `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use centum_shared::{Amount, AppConfig, Currency, MoneyError, MoneyResult};
use tracing::trace;

use crate::money::Money;

/// Built-in ISO 4217 table: code, grapheme, template, decimal, thousand, fraction.
const DEFAULT_CURRENCIES: &[(&str, &str, &str, &str, &str, u32)] = &[
    ("AED", ".\u{062f}.\u{0625}", "1 $", ".", ",", 2),
    ("AUD", "$", "$1", ".", ",", 2),
    ("BHD", ".\u{062f}.\u{0628}", "1 $", ".", ",", 3),
    ("BRL", "R$", "$1", ",", ".", 2),
    ("CAD", "$", "$1", ".", ",", 2),
    ("CHF", "CHF", "1 $", ".", ",", 2),
    ("CLP", "$", "$1", ",", ".", 0),
    ("CNY", "\u{5143}", "1 $", ".", ",", 2),
    ("CZK", "K\u{010d}", "1 $", ",", ".", 2),
    ("DKK", "kr", "1 $", ",", ".", 2),
    ("EUR", "\u{20ac}", "$1", ".", ",", 2),
    ("GBP", "\u{00a3}", "$1", ".", ",", 2),
    ("HKD", "$", "$1", ".", ",", 2),
    ("HUF", "Ft", "1 $", ",", ".", 2),
    ("IDR", "Rp", "$1", ",", ".", 2),
    ("INR", "\u{20b9}", "$1", ".", ",", 2),
    ("IQD", ".\u{062f}.\u{0639}", "1 $", ".", ",", 3),
    ("ISK", "kr", "1 $", ",", ".", 0),
    ("JOD", ".\u{062f}.\u{0625}", "1 $", ".", ",", 3),
    ("JPY", "\u{00a5}", "$1", ".", ",", 0),
    ("KRW", "\u{20a9}", "$1", ".", ",", 0),
    ("KWD", ".\u{062f}.\u{0643}", "1 $", ".", ",", 3),
    ("MXN", "$", "$1", ".", ",", 2),
    ("NOK", "kr", "1 $", ",", ".", 2),
    ("NZD", "$", "$1", ".", ",", 2),
    ("OMR", "\u{fdfc}", "1 $", ".", ",", 3),
    ("PLN", "z\u{0142}", "1 $", ",", " ", 2),
    ("SEK", "kr", "1 $", ",", " ", 2),
    ("SGD", "$", "$1", ".", ",", 2),
    ("THB", "\u{0e3f}", "$1", ".", ",", 2),
    ("TND", "\u{062f}.\u{062a}", "1 $", ".", ",", 3),
    ("TRY", "\u{20ba}", "$1", ".", ",", 2),
    ("USD", "$", "$1", ".", ",", 2),
    ("VND", "\u{20ab}", "1 $", ",", ".", 0),
    ("ZAR", "R", "$1", ".", " ", 2),
];

/// Maps currency codes to descriptors.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in table.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for &(code, grapheme, template, decimal, thousand, fraction) in DEFAULT_CURRENCIES {
            registry.register(Currency::new(
                code, grapheme, template, decimal, thousand, fraction,
            ));
        }
        registry
    }

    /// Built-in table plus every currency declared in `config`.
    ///
    /// Configured currencies replace built-ins with the same code.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::with_defaults();
        for currency in config.custom_currencies() {
            registry.register(currency);
        }
        registry
    }

    /// Inserts or replaces the descriptor for its code.
    pub fn register(&mut self, currency: Currency) -> Arc<Currency> {
        trace!(code = currency.code(), fraction = currency.fraction(), "registering currency");
        let currency = Arc::new(currency);
        self.currencies
            .insert(currency.code().to_string(), Arc::clone(&currency));
        currency
    }

    /// Looks up a descriptor. Codes are case-insensitive.
    pub fn get(&self, code: &str) -> MoneyResult<Arc<Currency>> {
        self.currencies
            .get(&code.to_uppercase())
            .cloned()
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(&code.to_uppercase())
    }

    /// Creates `Money` in the currency identified by `code`.
    pub fn money(&self, amount: impl Into<Amount>, code: &str) -> MoneyResult<Money> {
        Ok(Money::new(amount, self.get(code)?))
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
