//! Common types used across the workspace.

pub mod amount;
pub mod currency;

pub use amount::Amount;
pub use currency::Currency;
