//! Currency lookup and display.

pub mod formatter;
pub mod registry;

pub use formatter::Formatter;
pub use registry::CurrencyRegistry;
