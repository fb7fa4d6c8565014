//! Core money logic for Centum.
//!
//! This crate contains pure logic with no I/O. Every operation is a
//! synchronous function from inputs to a freshly built result.
//!
//! # Modules
//!
//! - `money` - Integer arithmetic, exact-sum allocation, the `Money` value object, encoding
//! - `currency` - Currency registry and display formatting

pub mod currency;
pub mod money;

pub use currency::{CurrencyRegistry, Formatter};
pub use money::{AllocationUtil, Calculator, JsonCodec, Money, MoneyCodec};
