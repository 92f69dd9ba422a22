use {
    alloy_primitives::Address,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

use crate::error::{FeeError, FeeResult};

/// Point-in-time USD price of an asset and the asset's token decimals.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceEntry {
    pub price: f64,
    pub decimals: u32,
}

/// Price service key: `"<chain>:0x<lowercase hex address>"`.
pub fn price_key(chain: &str, asset: &Address) -> String {
    format!("{}:{}", chain, asset.to_string().to_lowercase())
}

/// Prices fetched once per invocation. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
}

impl PriceTable {
    /// Keys are lowercased so a price service answering in mixed case still matches.
    pub fn new(entries: HashMap<String, PriceEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, entry)| (key.to_lowercase(), entry))
                .collect(),
        }
    }

    pub fn lookup(&self, chain: &str, asset: &Address) -> FeeResult<&PriceEntry> {
        let key = price_key(chain, asset);
        self.entries
            .get(&key)
            .ok_or(FeeError::PriceNotFound { key })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
