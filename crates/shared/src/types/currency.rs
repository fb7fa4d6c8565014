//! Currency descriptor.
//!
//! A descriptor is an immutable value. Two descriptors are the same currency
//! when every field matches, regardless of where either was allocated.

use serde::{Deserialize, Serialize};

/// Describes how a currency stores and displays minor units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    grapheme: String,
    template: String,
    decimal: String,
    thousand: String,
    fraction: u32,
}

impl Currency {
    /// Creates a new currency descriptor.
    ///
    /// The code is stored upper-cased. In `template`, `1` marks where the
    /// formatted number goes and `$` marks where the grapheme goes.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        grapheme: impl Into<String>,
        template: impl Into<String>,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
        fraction: u32,
    ) -> Self {
        Self {
            code: code.into().to_uppercase(),
            grapheme: grapheme.into(),
            template: template.into(),
            decimal: decimal.into(),
            thousand: thousand.into(),
            fraction,
        }
    }

    /// ISO 4217 code (e.g., "USD").
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display symbol (e.g., "$").
    #[must_use]
    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }

    /// Display template (e.g., "$1" or "1 $").
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Decimal separator.
    #[must_use]
    pub fn decimal(&self) -> &str {
        &self.decimal
    }

    /// Thousands separator. Empty disables grouping.
    #[must_use]
    pub fn thousand(&self) -> &str {
        &self.thousand
    }

    /// Number of minor-unit digits (2 for cents).
    #[must_use]
    pub const fn fraction(&self) -> u32 {
        self.fraction
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
