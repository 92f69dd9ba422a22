use crate::{
    error::{FeeError, FeeResult},
    utils::{epoch_sec_to_utc, start_of_day_utc, start_of_next_day_utc},
};

/// The UTC calendar day an invocation is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub current_timestamp: i64,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
}

impl TimeWindow {
    pub fn for_timestamp(timestamp: i64) -> FeeResult<Self> {
        let start_timestamp = start_of_day_utc(timestamp).ok_or(FeeError::Resolution { timestamp })?;
        let end_timestamp =
            start_of_next_day_utc(timestamp).ok_or(FeeError::Resolution { timestamp })?;

        Ok(Self {
            current_timestamp: timestamp,
            start_timestamp,
            end_timestamp,
        })
    }

    /// Nominal length of the window in seconds (always one day).
    pub fn timespan(&self) -> i64 {
        self.end_timestamp - self.start_timestamp
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{} .. {}) at {}",
            epoch_sec_to_utc(self.start_timestamp),
            epoch_sec_to_utc(self.end_timestamp),
            epoch_sec_to_utc(self.current_timestamp)
        )
    }
}

/// Block numbers resolved for the three timestamps of a `TimeWindow`.
/// `current_block` may sit anywhere between the two bounds, including at `end_block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    pub current_block: u64,
    pub start_block: u64,
    pub end_block: u64,
}

impl BlockWindow {
    pub fn new(current_block: u64, start_block: u64, end_block: u64) -> FeeResult<Self> {
        if start_block > current_block || current_block > end_block {
            return Err(FeeError::BlockOrder {
                start: start_block,
                current: current_block,
                end: end_block,
            });
        }
        Ok(Self {
            current_block,
            start_block,
            end_block,
        })
    }
}

impl std::fmt::Display for BlockWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "blocks [{} ..= {}] current {}",
            self.start_block, self.end_block, self.current_block
        )
    }
}
