mod provider;
mod snapshot;

pub use {
    provider::{
        BlockResolver, Collaborators, LogSource, MarketDetails, MarketDirectory, PriceSource,
        RewardAccrual, RewardSource,
    },
    snapshot::{BlockAnchor, ChainSnapshot, SnapshotMarket, SnapshotReward, SnapshotSource},
};
