//! Configuration module for the fee adapter.

// Can be private because we have a public re-export.
mod protocol;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{RESERVE_FACTOR_DECIMALS, SECONDS_IN_DAY};
pub use protocol::{ProtocolConfig, SONNE};
