mod maths_utils;
pub mod time_utils;

pub use time_utils::{
    TimeUtils, epoch_sec_to_utc, format_duration, now_timestamp_secs, start_of_day_utc,
    start_of_next_day_utc,
};

pub use maths_utils::{format_units, price_to_decimal};
pub(crate) use maths_utils::{checked_add, checked_mul};
