use crate::{
    config::ProtocolConfig,
    data::{BlockResolver, Collaborators},
    domain::{BlockWindow, MarketSet, PriceTable, TimeWindow, price_key},
    error::{FeeError, FeeResult},
};

/// Everything both aggregators read. Built once per `fetch`, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Context {
    pub chain: &'static str,
    pub time: TimeWindow,
    pub blocks: BlockWindow,
    pub markets: MarketSet,
    pub prices: PriceTable,
}

async fn resolve_block(blocks: &dyn BlockResolver, timestamp: i64, chain: &str) -> FeeResult<u64> {
    blocks
        .resolve_block(timestamp, chain)
        .await?
        .ok_or(FeeError::Resolution { timestamp })
}

pub async fn build_context(
    config: &ProtocolConfig,
    collaborators: &Collaborators,
    timestamp: i64,
) -> FeeResult<Context> {
    let chain = config.chain;

    // 1. Day boundaries
    let time = TimeWindow::for_timestamp(timestamp)?;

    // 2. Blocks for now, day start and next day start
    let resolver = collaborators.blocks.as_ref();
    let (current_block, start_block, end_block) = tokio::try_join!(
        resolve_block(resolver, time.current_timestamp, chain),
        resolve_block(resolver, time.start_timestamp, chain),
        resolve_block(resolver, time.end_timestamp, chain),
    )?;
    let blocks = BlockWindow::new(current_block, start_block, end_block)?;

    // 3. Market set
    let addresses = collaborators
        .markets
        .list_markets(config.comptroller, chain)
        .await?;
    let details = collaborators
        .markets
        .get_market_details(&addresses, chain)
        .await?;
    let markets =
        MarketSet::from_parallel(addresses, details.underlyings, details.reserve_factors)?;

    // 4. Prices for every underlying plus the reward token, as of the invocation time
    let mut keys: Vec<String> = markets
        .iter()
        .map(|m| price_key(chain, &m.underlying))
        .collect();
    keys.push(price_key(chain, &config.reward_token));
    keys.sort();
    keys.dedup();
    let prices = PriceTable::new(collaborators.prices.get_prices(&keys, timestamp).await?);

    log::info!(
        "📅 {} on {}: {}, {} markets, {}/{} prices",
        time,
        chain,
        blocks,
        markets.len(),
        prices.len(),
        keys.len()
    );

    Ok(Context {
        chain,
        time,
        blocks,
        markets,
        prices,
    })
}
