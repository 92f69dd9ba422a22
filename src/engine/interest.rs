use {anyhow::anyhow, futures::future::try_join_all, rust_decimal::Decimal};

use crate::{
    config::RESERVE_FACTOR_DECIMALS,
    data::LogSource,
    domain::AccrualEvent,
    engine::Context,
    error::{FeeError, FeeResult},
    utils::{checked_add, checked_mul, format_units, price_to_decimal},
};

/// Gross interest and the protocol's retained share, in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestTotals {
    pub fees: Decimal,
    pub revenue: Decimal,
    pub events: usize,
}

/// Pulls every market's accrual logs over `[start_block, end_block]` and values them.
pub async fn fetch_interest(ctx: &Context, logs: &dyn LogSource) -> FeeResult<InterestTotals> {
    let requests = ctx
        .markets
        .addresses()
        .map(|market| async move {
            let raw = logs
                .get_accrual_logs(market, ctx.blocks.start_block, ctx.blocks.end_block, ctx.chain)
                .await?;
            log::debug!("{} accrual logs for market {}", raw.len(), market);
            raw.iter()
                .map(AccrualEvent::decode)
                .collect::<FeeResult<Vec<_>>>()
        })
        .collect::<Vec<_>>();

    let events: Vec<AccrualEvent> = try_join_all(requests).await?.into_iter().flatten().collect();

    sum_accruals(ctx, &events)
}

/// Folds accrual events into USD totals. Order of `events` does not matter.
pub fn sum_accruals(ctx: &Context, events: &[AccrualEvent]) -> FeeResult<InterestTotals> {
    let mut totals = InterestTotals::default();

    for event in events {
        let market = ctx.markets.get(&event.market).ok_or_else(|| {
            FeeError::Collaborator(anyhow!("accrual log from unknown market {}", event.market))
        })?;
        let price = ctx.prices.lookup(ctx.chain, &market.underlying)?;

        let interest_tokens = format_units(event.interest_accumulated, price.decimals)?;
        let reserve_factor = format_units(market.reserve_factor, RESERVE_FACTOR_DECIMALS)?;
        let interest_usd = checked_mul(interest_tokens, price_to_decimal(price.price)?)?;

        totals.fees = checked_add(totals.fees, interest_usd)?;
        totals.revenue = checked_add(totals.revenue, checked_mul(interest_usd, reserve_factor)?)?;
        totals.events += 1;
    }

    log::debug!(
        "💰 {} accruals: fees ${}, revenue ${}",
        totals.events,
        totals.fees,
        totals.revenue
    );
    Ok(totals)
}
