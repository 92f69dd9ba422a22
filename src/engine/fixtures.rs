//! Snapshot builders shared by the engine tests.

use {
    alloy_primitives::{Address, U256, address},
    std::sync::Arc,
};

use crate::{
    config::SONNE,
    data::{BlockAnchor, ChainSnapshot, SnapshotMarket, SnapshotReward, SnapshotSource},
    domain::{BlockWindow, MarketSet, PriceEntry, PriceTable, RawLog, TimeWindow, price_key},
    engine::Context,
};

/// 2023-11-14 00:00:00 UTC
pub const DAY_START: i64 = 1_699_920_000;
/// Midday of the same day
pub const NOW: i64 = DAY_START + 43_200;

pub fn usdc() -> Address {
    address!("7F5c764cBc14f9669B88837ca1490cCa17c31607")
}

pub fn weth() -> Address {
    address!("4200000000000000000000000000000000000006")
}

pub fn market(n: u8) -> Address {
    Address::repeat_byte(n)
}

/// `value` as an 18-decimal fixed-point integer, e.g. `wad(1, 10)` is 0.1.
pub fn wad(numerator: u64, denominator: u64) -> U256 {
    U256::from(numerator) * U256::from(10u64).pow(U256::from(18u64)) / U256::from(denominator)
}

pub struct SnapshotBuilder {
    pub snapshot: ChainSnapshot,
}

impl SnapshotBuilder {
    /// One day of 2-second blocks starting at block 1000.
    pub fn new() -> Self {
        Self {
            snapshot: ChainSnapshot {
                chain: SONNE.chain.to_string(),
                registry: SONNE.comptroller,
                block_anchors: vec![
                    BlockAnchor {
                        timestamp: DAY_START,
                        block: 1_000,
                    },
                    BlockAnchor {
                        timestamp: DAY_START + 86_400,
                        block: 1_000 + 43_200,
                    },
                ],
                ..Default::default()
            },
        }
    }

    pub fn with_market(mut self, address: Address, underlying: Address, reserve_factor: U256) -> Self {
        self.snapshot.markets.push(SnapshotMarket {
            address,
            underlying,
            reserve_factor,
        });
        self
    }

    pub fn with_price(mut self, asset: Address, price: f64, decimals: u32) -> Self {
        self.snapshot
            .prices
            .insert(price_key(SONNE.chain, &asset), PriceEntry { price, decimals });
        self
    }

    pub fn with_accrual(mut self, market: Address, block: u64, interest: U256) -> Self {
        self.snapshot.logs.push(RawLog::accrue_interest(
            market,
            block,
            U256::ZERO,
            interest,
            U256::ZERO,
            U256::ZERO,
        ));
        self
    }

    pub fn with_reward(mut self, last_earn: i64, earned: U256) -> Self {
        self.snapshot.reward_accrual = Some(SnapshotReward { last_earn, earned });
        self
    }

    pub fn build(self) -> Arc<SnapshotSource> {
        Arc::new(SnapshotSource::new(self.snapshot))
    }
}

/// A context for the pure aggregation steps, without going through the collaborators.
pub fn context_with(markets: MarketSet, prices: PriceTable) -> Context {
    Context {
        chain: SONNE.chain,
        time: TimeWindow::for_timestamp(NOW).unwrap(),
        blocks: BlockWindow::new(1_000 + 21_600, 1_000, 1_000 + 43_200).unwrap(),
        markets,
        prices,
    }
}
