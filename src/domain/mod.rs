// Domain types and value objects
mod accrual;
mod daily_fees;
mod market;
mod price;
mod window;

// Re-export commonly used types to the world
pub use accrual::{AccrualEvent, AccrueInterest, RawLog};
pub use daily_fees::DailyFeeResult;
pub use market::{Market, MarketSet};
pub use price::{PriceEntry, PriceTable, price_key};
pub use window::{BlockWindow, TimeWindow};
