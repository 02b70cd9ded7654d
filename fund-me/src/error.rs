use cosmwasm_std::{ConversionOverflowError, OverflowError, StdError, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("You need to spend more: at least {minimum_usd} USD (18 decimals) is required")]
    InsufficientContribution { minimum_usd: Uint256 },

    #[error("Unauthorized - only {owner} can call it")]
    Unauthorized { owner: String },

    #[error("Transfer to the owner failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Funder index {index} out of range, {len} funders recorded")]
    IndexOutOfRange { index: u64, len: u32 },

    #[error("Price feed unavailable: {reason}")]
    PriceFeedUnavailable { reason: String },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow {},

    #[error("Unsupported denom {denom}")]
    UnsupportedDenom { denom: String },

    #[error("Invalid contract to migrate from: {contract}")]
    InvalidContract { contract: String },

    #[error("Unsupported contract version for migration: {version}")]
    InvalidContractVersion { version: String },

    #[error("Unknown reply id {id}")]
    UnknownReply { id: u64 },
}

impl From<OverflowError> for ContractError {
    fn from(_: OverflowError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(_: ConversionOverflowError) -> Self {
        ContractError::ArithmeticOverflow {}
    }
}
