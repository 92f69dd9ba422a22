use thiserror::Error;

/// Everything that can abort a daily fee computation.
/// None of these are recovered inside the crate: the scheduler decides whether to retry.
#[derive(Error, Debug)]
pub enum FeeError {
    #[error("Fees: no block known for timestamp {timestamp}")]
    Resolution { timestamp: i64 },
    #[error("Fees: resolved blocks out of order (start {start}, current {current}, end {end})")]
    BlockOrder { start: u64, current: u64, end: u64 },
    #[error("Fees: no price entry for {key}")]
    PriceNotFound { key: String },
    #[error("Fees: cannot pro-rate rewards over {earned_timespan}s since the last checkpoint")]
    Estimation { earned_timespan: i64 },
    #[error("Fees: invalid market set: {0}")]
    InvalidMarketSet(String),
    #[error("Fees: amount conversion failed: {0}")]
    Amount(String),
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

pub type FeeResult<T> = Result<T, FeeError>;
