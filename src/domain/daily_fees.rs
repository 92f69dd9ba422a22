use {
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
};

/// The record handed back to the scheduler. Monetary fields are decimal strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyFeeResult {
    pub timestamp: i64,
    pub daily_fees: String,
    pub daily_revenue: String,
    pub daily_holders_revenue: String,
}

impl DailyFeeResult {
    pub fn new(timestamp: i64, fees: Decimal, revenue: Decimal, holders_revenue: Decimal) -> Self {
        Self {
            timestamp,
            daily_fees: usd_string(fees),
            daily_revenue: usd_string(revenue),
            daily_holders_revenue: usd_string(holders_revenue),
        }
    }
}

// Trailing zeros carry no meaning here, so "1.000000" becomes "1"
fn usd_string(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_with_camel_case_string_fields() {
        let result = DailyFeeResult::new(1_700_000_000, dec!(1.000000), dec!(0.1000), dec!(40.1));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["timestamp"], 1_700_000_000);
        assert_eq!(json["dailyFees"], "1");
        assert_eq!(json["dailyRevenue"], "0.1");
        assert_eq!(json["dailyHoldersRevenue"], "40.1");
    }

    #[test]
    fn zero_renders_as_plain_zero() {
        let result = DailyFeeResult::new(0, Decimal::ZERO, dec!(0.000), Decimal::ZERO);
        assert_eq!(result.daily_fees, "0");
        assert_eq!(result.daily_revenue, "0");
    }
}
