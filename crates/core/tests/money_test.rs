//! Integration tests for money operations through the public API.

use std::sync::Arc;
use std::thread;

use centum_core::{CurrencyRegistry, JsonCodec, Money, MoneyCodec};
use centum_shared::{Currency, MoneyError, MoneyResult};
use serde::{Deserialize, Serialize};

/// Alternative wire shape carrying the fraction alongside the code.
struct DetailedCodec {
    registry: Arc<CurrencyRegistry>,
}

#[derive(Serialize, Deserialize)]
struct DetailedRecord {
    amount: i64,
    currency_code: String,
    currency_fraction: u32,
}

impl MoneyCodec for DetailedCodec {
    fn encode(&self, money: &Money) -> MoneyResult<Vec<u8>> {
        let record = DetailedRecord {
            amount: money.amount().value(),
            currency_code: money.currency().code().to_string(),
            currency_fraction: money.currency().fraction(),
        };
        Ok(serde_json::to_vec(&record)?)
    }

    fn decode(&self, bytes: &[u8]) -> MoneyResult<Money> {
        let record: DetailedRecord = serde_json::from_slice(bytes)?;
        let money = self.registry.money(record.amount, &record.currency_code)?;
        if money.currency().fraction() != record.currency_fraction {
            return Err(MoneyError::Codec("fraction does not match registry".into()));
        }
        Ok(money)
    }
}

fn registry() -> Arc<CurrencyRegistry> {
    Arc::new(CurrencyRegistry::with_defaults())
}

#[test]
fn test_custom_codec_encode() {
    let registry = registry();
    let codec = DetailedCodec {
        registry: Arc::clone(&registry),
    };
    let money = registry.money(12345, "IQD").unwrap();

    let encoded = String::from_utf8(codec.encode(&money).unwrap()).unwrap();
    assert_eq!(
        encoded,
        r#"{"amount":12345,"currency_code":"IQD","currency_fraction":3}"#
    );
}

#[test]
fn test_custom_codec_decode() {
    let codec = DetailedCodec {
        registry: registry(),
    };
    let money = codec
        .decode(br#"{"amount": 10012, "currency_code": "USD", "currency_fraction": 2}"#)
        .unwrap();
    assert_eq!(money.to_string(), "$100.12");
}

#[test]
fn test_codecs_are_interchangeable() {
    let registry = registry();
    let codecs: Vec<Box<dyn MoneyCodec>> = vec![
        Box::new(JsonCodec::new(Arc::clone(&registry))),
        Box::new(DetailedCodec {
            registry: Arc::clone(&registry),
        }),
    ];
    let money = registry.money(-4200, "EUR").unwrap();

    for codec in &codecs {
        let decoded = codec.decode(&codec.encode(&money).unwrap()).unwrap();
        assert_eq!(decoded, money);
    }
}

#[test]
fn test_registered_currency_end_to_end() {
    let mut registry = CurrencyRegistry::with_defaults();
    registry.register(Currency::new("MOCK", "M$", "1 $", ".", ",", 5));

    let money = registry.money(1, "MOCK").unwrap();
    assert_eq!(money.currency().code(), "MOCK");
    assert_eq!(money.currency().fraction(), 5);
    assert_eq!(money.to_string(), "0.00001 M$");
}

#[test]
fn test_invoice_split_keeps_every_cent() {
    let registry = registry();
    let invoice = registry.money(100_001, "USD").unwrap();

    let shares = invoice.allocate(&[70, 20, 10]).unwrap();
    let total = shares
        .iter()
        .try_fold(Money::zero(registry.get("USD").unwrap()), |acc, s| acc.add(s))
        .unwrap();
    assert_eq!(total, invoice);

    let rendered: Vec<String> = shares.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["$700.01", "$200.00", "$100.00"]);
}

#[test]
fn test_shared_money_across_threads() {
    let money = Arc::new(registry().money(1_000_003, "EUR").unwrap());

    let handles: Vec<_> = (1..=8)
        .map(|n| {
            let money = Arc::clone(&money);
            thread::spawn(move || {
                let parts = money.split(n).unwrap();
                parts.iter().map(|p| p.amount().value()).sum::<i64>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1_000_003);
    }
    // Source value untouched.
    assert_eq!(money.amount().value(), 1_000_003);
}
