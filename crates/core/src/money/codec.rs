//! Serialization boundary for `Money`.
//!
//! The wire mapping is a strategy handed to whoever encodes or decodes, never
//! a process-wide hook. Swap the codec to change the external shape without
//! touching the arithmetic.

use std::sync::Arc;

use centum_shared::{MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

use super::types::Money;
use crate::currency::CurrencyRegistry;

/// Translates `Money` to and from bytes.
pub trait MoneyCodec: Send + Sync {
    /// Encodes a value.
    fn encode(&self, money: &Money) -> MoneyResult<Vec<u8>>;

    /// Decodes a value.
    fn decode(&self, bytes: &[u8]) -> MoneyResult<Money>;
}

/// Default wire shape: `{"amount":12345,"currency":"IQD"}`.
#[derive(Debug, Serialize, Deserialize)]
struct MoneyRecord<'a> {
    amount: i64,
    #[serde(borrow)]
    currency: std::borrow::Cow<'a, str>,
}

/// JSON codec resolving currency codes through a registry.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    registry: Arc<CurrencyRegistry>,
}

impl JsonCodec {
    /// Creates a codec that looks currencies up in `registry`.
    pub fn new(registry: Arc<CurrencyRegistry>) -> Self {
        Self { registry }
    }

    /// The registry used for decoding.
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }
}

impl MoneyCodec for JsonCodec {
    fn encode(&self, money: &Money) -> MoneyResult<Vec<u8>> {
        let record = MoneyRecord {
            amount: money.amount().value(),
            currency: money.currency().code().into(),
        };
        Ok(serde_json::to_vec(&record)?)
    }

    fn decode(&self, bytes: &[u8]) -> MoneyResult<Money> {
        let record: MoneyRecord<'_> = serde_json::from_slice(bytes)?;
        self.registry
            .money(record.amount, &record.currency)
            .map_err(|err| match err {
                MoneyError::UnknownCurrency(code) => {
                    MoneyError::Codec(format!("unknown currency code {code:?}"))
                }
                other => other,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> JsonCodec {
        JsonCodec::new(Arc::new(CurrencyRegistry::with_defaults()))
    }

    #[test]
    fn test_encode_default_shape() {
        let codec = codec();
        let money = codec.registry().money(12345, "IQD").unwrap();
        let bytes = codec.encode(&money).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"amount":12345,"currency":"IQD"}"#
        );
    }

    #[test]
    fn test_decode_default_shape() {
        let money = codec()
            .decode(br#"{"amount": 10012, "currency": "USD"}"#)
            .unwrap();
        assert_eq!(money.amount().value(), 10012);
        assert_eq!(money.to_string(), "$100.12");
    }

    #[test]
    fn test_decode_escaped_code() {
        let money = codec()
            .decode(br#"{"amount": 1, "currency": "U\u0053D"}"#)
            .unwrap();
        assert_eq!(money.currency().code(), "USD");
    }

    #[test]
    fn test_decode_unknown_currency() {
        let err = codec()
            .decode(br#"{"amount": 1, "currency": "XXX"}"#)
            .unwrap_err();
        assert_eq!(err.error_code(), "CODEC_ERROR");
    }

    #[test]
    fn test_decode_malformed() {
        let err = codec().decode(b"{\"amount\": \"ten\"}").unwrap_err();
        assert!(matches!(err, MoneyError::Codec(_)));

        let err = codec().decode(b"not json").unwrap_err();
        assert!(matches!(err, MoneyError::Codec(_)));
    }
}
