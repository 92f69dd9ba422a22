// Top Level Constants
pub const SECONDS_IN_DAY: i64 = 86_400;

/// Reserve factors are stored on-chain as 18-decimal fractions.
pub const RESERVE_FACTOR_DECIMALS: u32 = 18;
