use {
    alloy_primitives::{Address, U256},
    std::collections::HashMap,
};

use crate::error::{FeeError, FeeResult};

/// One lending market and the parameters needed to value its interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    pub address: Address,
    pub underlying: Address,
    /// 18-decimal fixed-point fraction of interest kept by the protocol.
    pub reserve_factor: U256,
}

/// Active markets, in directory order, with a by-address index.
#[derive(Debug, Clone, Default)]
pub struct MarketSet {
    markets: Vec<Market>,
    index: HashMap<Address, usize>,
}

impl MarketSet {
    /// Zips the directory's parallel sequences. They must line up one-to-one
    /// and name each market at most once.
    pub fn from_parallel(
        markets: Vec<Address>,
        underlyings: Vec<Address>,
        reserve_factors: Vec<U256>,
    ) -> FeeResult<Self> {
        if markets.len() != underlyings.len() || markets.len() != reserve_factors.len() {
            return Err(FeeError::InvalidMarketSet(format!(
                "{} markets, {} underlyings, {} reserve factors",
                markets.len(),
                underlyings.len(),
                reserve_factors.len()
            )));
        }

        let mut set = Self::default();
        for ((address, underlying), reserve_factor) in
            markets.into_iter().zip(underlyings).zip(reserve_factors)
        {
            if set.index.insert(address, set.markets.len()).is_some() {
                return Err(FeeError::InvalidMarketSet(format!(
                    "duplicate market {}",
                    address
                )));
            }
            set.markets.push(Market {
                address,
                underlying,
                reserve_factor,
            });
        }
        Ok(set)
    }

    pub fn get(&self, address: &Address) -> Option<&Market> {
        self.index.get(address).map(|&i| &self.markets[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Market> {
        self.markets.iter()
    }

    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.markets.iter().map(|m| m.address)
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
