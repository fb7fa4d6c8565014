//! Integer money arithmetic, allocation, and encoding.

pub mod allocation;
pub mod calculator;
pub mod codec;
pub mod types;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use calculator::Calculator;
pub use codec::{JsonCodec, MoneyCodec};
pub use types::Money;
