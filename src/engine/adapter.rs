use rust_decimal::Decimal;

use crate::{
    config::ProtocolConfig,
    data::Collaborators,
    domain::DailyFeeResult,
    engine::{build_context, estimate_rewards, fetch_interest},
    error::FeeResult,
    utils::checked_add,
};

/// The day's figures before they are rendered as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyFees {
    pub fees: Decimal,
    pub revenue: Decimal,
    pub reward_usd: Decimal,
    pub holders_revenue: Decimal,
}

/// Computes one protocol's daily fees from injected collaborators.
/// Stateless between calls: every `fetch` builds its own context.
pub struct FeeAdapter {
    config: ProtocolConfig,
    collaborators: Collaborators,
}

impl FeeAdapter {
    pub fn new(config: ProtocolConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            collaborators,
        }
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    pub async fn compute(&self, timestamp: i64) -> FeeResult<DailyFees> {
        let ctx = build_context(&self.config, &self.collaborators, timestamp).await?;

        // Interest and gauge rewards only share the context, so run them side by side
        let (interest, reward_usd) = tokio::try_join!(
            fetch_interest(&ctx, self.collaborators.logs.as_ref()),
            estimate_rewards(&ctx, &self.config, self.collaborators.rewards.as_ref()),
        )?;

        Ok(DailyFees {
            fees: interest.fees,
            revenue: interest.revenue,
            reward_usd,
            holders_revenue: checked_add(interest.revenue, reward_usd)?,
        })
    }

    pub async fn fetch(&self, timestamp: i64) -> FeeResult<DailyFeeResult> {
        let daily = self.compute(timestamp).await?;
        let result = DailyFeeResult::new(
            timestamp,
            daily.fees,
            daily.revenue,
            daily.holders_revenue,
        );

        log::info!(
            "✅ {}: fees ${}, revenue ${}, holders revenue ${}",
            timestamp,
            result.daily_fees,
            result.daily_revenue,
            result.daily_holders_revenue
        );
        Ok(result)
    }
}
