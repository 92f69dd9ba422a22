use rust_decimal::Decimal;

use crate::{
    config::ProtocolConfig,
    data::RewardSource,
    engine::Context,
    error::{FeeError, FeeResult},
    utils::{checked_mul, format_duration, format_units, price_to_decimal},
};

/// USD value of the gauge rewards attributable to the context's day.
///
/// Linear extrapolation: assumes the claimant accrued at a constant rate since its last
/// checkpoint, so the result is an estimate, not a measurement.
pub async fn estimate_rewards(
    ctx: &Context,
    config: &ProtocolConfig,
    rewards: &dyn RewardSource,
) -> FeeResult<Decimal> {
    let accrual = rewards
        .get_reward_accrual(
            config.gauge,
            config.reward_token,
            config.reward_claimant,
            ctx.chain,
            ctx.blocks.current_block,
        )
        .await?;

    let price = ctx.prices.lookup(ctx.chain, &config.reward_token)?;
    let earned_tokens = format_units(accrual.earned, price.decimals)?;

    let earned_timespan = ctx
        .time
        .current_timestamp
        .checked_sub(accrual.last_earn)
        .ok_or_else(|| {
            FeeError::Amount(format!("checkpoint {} is out of range", accrual.last_earn))
        })?;
    let tokens_today = prorate_reward(ctx.time.timespan(), earned_timespan, earned_tokens)?;
    let usd = checked_mul(tokens_today, price_to_decimal(price.price)?)?;

    log::debug!(
        "🎁 {} reward tokens over {} since checkpoint, {} attributed to the day (${})",
        earned_tokens,
        format_duration(earned_timespan),
        tokens_today,
        usd
    );
    Ok(usd)
}

/// Scales `earned_tokens` by `timespan / earned_timespan`.
/// A checkpoint at or after "now" leaves no elapsed time to scale by and is an error.
pub fn prorate_reward(
    timespan: i64,
    earned_timespan: i64,
    earned_tokens: Decimal,
) -> FeeResult<Decimal> {
    if earned_timespan <= 0 {
        return Err(FeeError::Estimation { earned_timespan });
    }

    // Multiply before dividing so exact ratios stay exact
    earned_tokens
        .checked_mul(Decimal::from(timespan))
        .and_then(|scaled| scaled.checked_div(Decimal::from(earned_timespan)))
        .ok_or_else(|| {
            FeeError::Amount(format!(
                "pro-rating {} tokens by {}/{}",
                earned_tokens, timespan, earned_timespan
            ))
        })
}
