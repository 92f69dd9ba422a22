use {
    alloy_primitives::{Address, U256},
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    std::{
        collections::HashMap,
        fs::File,
        io::BufReader,
        path::Path,
        sync::atomic::{AtomicUsize, Ordering},
    },
};

use crate::data::{
    BlockResolver, LogSource, MarketDetails, MarketDirectory, PriceSource, RewardAccrual,
    RewardSource,
};
use crate::domain::{PriceEntry, RawLog};

/// A known (timestamp, block) pair. Blocks between anchors are interpolated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockAnchor {
    pub timestamp: i64,
    pub block: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMarket {
    pub address: Address,
    pub underlying: Address,
    #[serde(with = "u256_string")]
    pub reserve_factor: U256,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotReward {
    pub last_earn: i64,
    #[serde(with = "u256_string")]
    pub earned: U256,
}

/// Everything one fee computation needs from the outside world, captured in a file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChainSnapshot {
    pub chain: String,
    pub registry: Address,
    pub block_anchors: Vec<BlockAnchor>,
    #[serde(default)]
    pub markets: Vec<SnapshotMarket>,
    #[serde(default)]
    pub prices: HashMap<String, PriceEntry>,
    #[serde(default)]
    pub logs: Vec<RawLog>,
    pub reward_accrual: Option<SnapshotReward>,
}

/// Serves every collaborator role from a `ChainSnapshot`.
/// Prices and gauge accounting are point-in-time: the requested timestamp/block is not consulted.
pub struct SnapshotSource {
    snapshot: ChainSnapshot,
    log_requests: AtomicUsize,
}

impl SnapshotSource {
    pub fn new(mut snapshot: ChainSnapshot) -> Self {
        snapshot.block_anchors.sort_by_key(|a| a.timestamp);
        Self {
            snapshot,
            log_requests: AtomicUsize::new(0),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open snapshot: {:?}", path))?;
        let reader = BufReader::new(file);
        let snapshot: ChainSnapshot = serde_json::from_reader(reader)
            .context(format!("Failed to parse snapshot: {:?}", path))?;

        log::info!(
            "📂 Loaded snapshot for {}: {} markets, {} logs, {} prices",
            snapshot.chain,
            snapshot.markets.len(),
            snapshot.logs.len(),
            snapshot.prices.len()
        );
        Ok(Self::new(snapshot))
    }

    /// Number of `get_accrual_logs` calls served so far.
    pub fn log_requests(&self) -> usize {
        self.log_requests.load(Ordering::Relaxed)
    }

    fn check_chain(&self, chain: &str) -> Result<()> {
        if chain != self.snapshot.chain {
            bail!(
                "Snapshot covers chain {}, but {} was requested",
                self.snapshot.chain,
                chain
            );
        }
        Ok(())
    }

    fn interpolate_block(&self, timestamp: i64) -> Option<u64> {
        let anchors = &self.snapshot.block_anchors;
        let first = anchors.first()?;
        let last = anchors.last()?;
        if timestamp < first.timestamp || timestamp > last.timestamp {
            return None;
        }

        let upper = anchors.partition_point(|a| a.timestamp < timestamp);
        let hi = anchors[upper];
        if hi.timestamp == timestamp || upper == 0 {
            return Some(hi.block);
        }
        let lo = anchors[upper - 1];

        let elapsed = (timestamp - lo.timestamp) as u128;
        let span = (hi.timestamp - lo.timestamp) as u128;
        let blocks = hi.block.saturating_sub(lo.block) as u128;
        Some(lo.block + (blocks * elapsed / span) as u64)
    }
}

#[async_trait]
impl BlockResolver for SnapshotSource {
    async fn resolve_block(&self, timestamp: i64, chain: &str) -> Result<Option<u64>> {
        self.check_chain(chain)?;
        Ok(self.interpolate_block(timestamp))
    }
}

#[async_trait]
impl MarketDirectory for SnapshotSource {
    async fn list_markets(&self, registry: Address, chain: &str) -> Result<Vec<Address>> {
        self.check_chain(chain)?;
        if registry != self.snapshot.registry {
            bail!("Snapshot has no market registry at {}", registry);
        }
        Ok(self.snapshot.markets.iter().map(|m| m.address).collect())
    }

    async fn get_market_details(&self, markets: &[Address], chain: &str) -> Result<MarketDetails> {
        self.check_chain(chain)?;
        let mut details = MarketDetails::default();
        for market in markets {
            let found = self
                .snapshot
                .markets
                .iter()
                .find(|m| &m.address == market)
                .with_context(|| format!("Snapshot has no details for market {}", market))?;
            details.underlyings.push(found.underlying);
            details.reserve_factors.push(found.reserve_factor);
        }
        Ok(details)
    }
}

#[async_trait]
impl PriceSource for SnapshotSource {
    async fn get_prices(
        &self,
        keys: &[String],
        _timestamp: i64,
    ) -> Result<HashMap<String, PriceEntry>> {
        // Unknown assets are simply absent, like a price service with no coverage for them
        Ok(keys
            .iter()
            .filter_map(|key| {
                self.snapshot
                    .prices
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, entry)| (key.clone(), *entry))
            })
            .collect())
    }
}

#[async_trait]
impl LogSource for SnapshotSource {
    async fn get_accrual_logs(
        &self,
        market: Address,
        from_block: u64,
        to_block: u64,
        chain: &str,
    ) -> Result<Vec<RawLog>> {
        self.check_chain(chain)?;
        self.log_requests.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .snapshot
            .logs
            .iter()
            .filter(|log| {
                log.address == market
                    && log.block_number >= from_block
                    && log.block_number <= to_block
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RewardSource for SnapshotSource {
    async fn get_reward_accrual(
        &self,
        _gauge: Address,
        _reward_token: Address,
        claimant: Address,
        chain: &str,
        _at_block: u64,
    ) -> Result<RewardAccrual> {
        self.check_chain(chain)?;
        let reward = self
            .snapshot
            .reward_accrual
            .with_context(|| format!("Snapshot has no gauge accrual for {}", claimant))?;
        Ok(RewardAccrual {
            last_earn: reward.last_earn,
            earned: reward.earned,
        })
    }
}

/// U256 amounts as decimal (or `0x`-prefixed hex) strings, since JSON numbers lose precision.
mod u256_string {
    use {
        alloy_primitives::U256,
        serde::{Deserialize, Deserializer, Serializer, de::Error},
        std::str::FromStr,
    };

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_str(&s).map_err(|e| D::Error::custom(format!("bad amount {:?}: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(anchors: &[(i64, u64)]) -> SnapshotSource {
        SnapshotSource::new(ChainSnapshot {
            chain: "optimism".into(),
            block_anchors: anchors
                .iter()
                .map(|&(timestamp, block)| BlockAnchor { timestamp, block })
                .collect(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn interpolates_between_anchors() {
        let source = anchored(&[(2_000, 300), (1_000, 100)]);

        assert_eq!(source.resolve_block(1_000, "optimism").await.unwrap(), Some(100));
        assert_eq!(source.resolve_block(1_500, "optimism").await.unwrap(), Some(200));
        assert_eq!(source.resolve_block(2_000, "optimism").await.unwrap(), Some(300));
    }

    #[tokio::test]
    async fn outside_anchor_range_is_unresolvable() {
        let source = anchored(&[(1_000, 100), (2_000, 300)]);

        assert_eq!(source.resolve_block(999, "optimism").await.unwrap(), None);
        assert_eq!(source.resolve_block(2_001, "optimism").await.unwrap(), None);
        assert_eq!(anchored(&[]).resolve_block(0, "optimism").await.unwrap(), None);
    }

    #[tokio::test]
    async fn wrong_chain_is_an_error() {
        let source = anchored(&[(1_000, 100)]);
        assert!(source.resolve_block(1_000, "ethereum").await.is_err());
    }

    #[tokio::test]
    async fn log_range_is_inclusive_and_per_market() {
        let market = Address::repeat_byte(1);
        let other = Address::repeat_byte(2);
        let mut snapshot = ChainSnapshot {
            chain: "optimism".into(),
            ..Default::default()
        };
        for (address, block) in [(market, 9), (market, 10), (market, 20), (market, 21), (other, 15)]
        {
            snapshot.logs.push(RawLog::accrue_interest(
                address,
                block,
                U256::ZERO,
                U256::ZERO,
                U256::ZERO,
                U256::ZERO,
            ));
        }
        let source = SnapshotSource::new(snapshot);

        let logs = source.get_accrual_logs(market, 10, 20, "optimism").await.unwrap();
        let blocks: Vec<u64> = logs.iter().map(|l| l.block_number).collect();
        assert_eq!(blocks, vec![10, 20]);
        assert_eq!(source.log_requests(), 1);
    }

    #[tokio::test]
    async fn parses_snapshot_json() {
        let json = r#"{
            "chain": "optimism",
            "registry": "0x60cf091cd3f50420d50fd7f707414d0df4751c58",
            "blockAnchors": [{"timestamp": 0, "block": 1}],
            "markets": [{
                "address": "0x0101010101010101010101010101010101010101",
                "underlying": "0x0202020202020202020202020202020202020202",
                "reserveFactor": "100000000000000000"
            }],
            "prices": {"optimism:0x0202020202020202020202020202020202020202": {"price": 1.0, "decimals": 6}},
            "rewardAccrual": {"lastEarn": 5, "earned": "0x8ac7230489e80000"}
        }"#;
        let snapshot: ChainSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            snapshot.markets[0].reserve_factor,
            U256::from(100_000_000_000_000_000u64)
        );
        assert_eq!(
            snapshot.reward_accrual.unwrap().earned,
            U256::from(10_000_000_000_000_000_000u128)
        );

        let source = SnapshotSource::new(snapshot);
        let prices = source
            .get_prices(
                &[
                    "optimism:0x0202020202020202020202020202020202020202".to_string(),
                    "optimism:0x0303030303030303030303030303030303030303".to_string(),
                ],
                0,
            )
            .await
            .unwrap();
        assert_eq!(prices.len(), 1);
    }
}
