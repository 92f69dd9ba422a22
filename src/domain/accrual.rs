use {
    alloy_primitives::{Address, B256, Bytes, U256},
    alloy_sol_types::{SolEvent, sol},
    anyhow::anyhow,
    serde::{Deserialize, Serialize},
};

use crate::error::{FeeError, FeeResult};

sol! {
    /// Emitted by a cToken market whenever it recalculates accumulated interest.
    event AccrueInterest(uint256 cashPrior, uint256 interestAccumulated, uint256 borrowIndex, uint256 totalBorrows);
}

/// An EVM log as the log collaborator returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: u64,
}

/// A decoded `AccrueInterest` occurrence. Amounts are in the underlying's native units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccrualEvent {
    pub market: Address,
    pub block_number: u64,
    pub cash_prior: U256,
    pub interest_accumulated: U256,
    pub borrow_index_new: U256,
    pub total_borrows_new: U256,
}

impl AccrualEvent {
    pub fn decode(log: &RawLog) -> FeeResult<Self> {
        let event = AccrueInterest::decode_raw_log(log.topics.iter().copied(), &log.data, true)
            .map_err(|e| {
                FeeError::Collaborator(anyhow!(
                    "undecodable AccrueInterest log from {} at block {}: {}",
                    log.address,
                    log.block_number,
                    e
                ))
            })?;

        Ok(Self {
            market: log.address,
            block_number: log.block_number,
            cash_prior: event.cashPrior,
            interest_accumulated: event.interestAccumulated,
            borrow_index_new: event.borrowIndex,
            total_borrows_new: event.totalBorrows,
        })
    }
}

impl RawLog {
    /// Builds the log a market would emit for the given accrual.
    pub fn accrue_interest(
        market: Address,
        block_number: u64,
        cash_prior: U256,
        interest_accumulated: U256,
        borrow_index: U256,
        total_borrows: U256,
    ) -> Self {
        let event = AccrueInterest {
            cashPrior: cash_prior,
            interestAccumulated: interest_accumulated,
            borrowIndex: borrow_index,
            totalBorrows: total_borrows,
        };
        Self {
            address: market,
            topics: vec![AccrueInterest::SIGNATURE_HASH],
            data: event.encode_data().into(),
            block_number,
        }
    }
}
