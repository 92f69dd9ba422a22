mod adapter;
mod context;
#[cfg(test)]
mod fixtures;
mod interest;
mod rewards;

pub use adapter::{DailyFees, FeeAdapter};
pub use context::{Context, build_context};
pub use interest::{InterestTotals, fetch_interest, sum_accruals};
pub use rewards::{estimate_rewards, prorate_reward};
