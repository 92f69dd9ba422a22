use alloy_primitives::{Address, address};

/// Fixed addresses a single protocol deployment is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Chain prefix used for price keys and collaborator calls.
    pub chain: &'static str,
    /// Market registry (the comptroller behind its unitroller proxy)
    pub comptroller: Address,
    pub gauge: Address,
    pub reward_token: Address,
    /// Holder whose gauge position accrues the side reward stream
    pub reward_claimant: Address,
}

pub const SONNE: ProtocolConfig = ProtocolConfig {
    chain: "optimism",
    comptroller: address!("60CF091cD3f50420d50fD7f707414d0DF4751C58"),
    gauge: address!("3786d4419d6b4a902607ceb2bb319bb336735df8"),
    reward_token: address!("3c8b650257cfb5f272f799f5e2b4e65093a11a05"),
    reward_claimant: address!("17063ad4e83b0aba4ca0f3fc3a9794e807a00ed7"),
};
