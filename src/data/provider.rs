use {
    alloy_primitives::{Address, U256},
    anyhow::Result,
    async_trait::async_trait,
    std::{collections::HashMap, sync::Arc},
};

use crate::domain::{PriceEntry, RawLog};

/// Underlying asset and reserve factor per market, index-aligned with the market list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketDetails {
    pub underlyings: Vec<Address>,
    pub reserve_factors: Vec<U256>,
}

/// Gauge accounting for one claimant as of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardAccrual {
    /// Timestamp of the claimant's last reward checkpoint.
    pub last_earn: i64,
    /// Rewards accrued since that checkpoint, in reward-token native units.
    pub earned: U256,
}

/// Maps timestamps to block numbers.
#[async_trait]
pub trait BlockResolver: Send + Sync {
    /// `Ok(None)` when the timestamp lies outside the range the resolver knows about.
    async fn resolve_block(&self, timestamp: i64, chain: &str) -> Result<Option<u64>>;
}

/// Enumerates the protocol's markets and their parameters.
#[async_trait]
pub trait MarketDirectory: Send + Sync {
    async fn list_markets(&self, registry: Address, chain: &str) -> Result<Vec<Address>>;

    async fn get_market_details(&self, markets: &[Address], chain: &str) -> Result<MarketDetails>;
}

/// Historical USD prices keyed `"chain:asset"`.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn get_prices(
        &self,
        keys: &[String],
        timestamp: i64,
    ) -> Result<HashMap<String, PriceEntry>>;
}

/// Raw `AccrueInterest` logs of one market over an inclusive block range.
#[async_trait]
pub trait LogSource: Send + Sync {
    async fn get_accrual_logs(
        &self,
        market: Address,
        from_block: u64,
        to_block: u64,
        chain: &str,
    ) -> Result<Vec<RawLog>>;
}

/// Gauge reward accounting.
#[async_trait]
pub trait RewardSource: Send + Sync {
    async fn get_reward_accrual(
        &self,
        gauge: Address,
        reward_token: Address,
        claimant: Address,
        chain: &str,
        at_block: u64,
    ) -> Result<RewardAccrual>;
}

/// Handles to every external collaborator one fee computation talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub blocks: Arc<dyn BlockResolver>,
    pub markets: Arc<dyn MarketDirectory>,
    pub prices: Arc<dyn PriceSource>,
    pub logs: Arc<dyn LogSource>,
    pub rewards: Arc<dyn RewardSource>,
}

impl Collaborators {
    /// Uses one backend for every role (e.g. a snapshot file or a test fake).
    pub fn from_source<S>(source: Arc<S>) -> Self
    where
        S: BlockResolver + MarketDirectory + PriceSource + LogSource + RewardSource + 'static,
    {
        Self {
            blocks: source.clone(),
            markets: source.clone(),
            prices: source.clone(),
            logs: source.clone(),
            rewards: source,
        }
    }
}
