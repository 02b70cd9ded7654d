use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Int128, Timestamp, Uint128, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    // Address of the price feed contract reporting the native/USD rate.
    pub price_feed: String,

    // Bank denom accepted as contribution.
    pub denom: String,

    // Precision of `denom`, 18 when absent.
    pub native_decimals: Option<u8>,

    // Minimum contribution in USD with 18 decimals, 50 USD when absent.
    pub minimum_usd: Option<Uint256>,
}

#[cw_serde]
pub enum ExecMsg {
    // Contribute the attached funds.
    Fund {},

    // Owner only: send the whole balance to the owner and reset every funder.
    Withdraw {},

    // Same as `Withdraw`, reading the funders list from storage only once.
    CheaperWithdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PriceFeedResp)]
    PriceFeed {},

    #[returns(AmountFundedResp)]
    AddressToAmountFunded { address: String },

    #[returns(FunderResp)]
    Funder { index: u64 },

    #[returns(FunderCountResp)]
    FunderCount {},

    #[returns(OwnerResp)]
    Owner {},

    #[returns(MinimumUsdResp)]
    MinimumUsd {},

    #[returns(PriceResp)]
    LatestPrice {},

    #[returns(ConversionRateResp)]
    ConversionRate { amount: Uint128 },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct PriceFeedResp {
    pub price_feed: Addr,
}

#[cw_serde]
pub struct AmountFundedResp {
    pub amount: Uint128,
}

#[cw_serde]
pub struct FunderResp {
    pub funder: Addr,
}

#[cw_serde]
pub struct FunderCountResp {
    pub count: u32,
}

#[cw_serde]
pub struct OwnerResp {
    pub owner: Addr,
}

#[cw_serde]
pub struct MinimumUsdResp {
    pub minimum_usd: Uint256,
}

#[cw_serde]
pub struct PriceResp {
    // USD per whole native unit, 18 decimals
    pub price: Uint256,
}

#[cw_serde]
pub struct ConversionRateResp {
    pub usd: Uint256,
}

/// Query understood by the price feed contract.
#[cw_serde]
pub enum PriceFeedQueryMsg {
    LatestRoundData {},
}

/// Latest round as reported by the price feed.
#[cw_serde]
pub struct RoundDataResp {
    pub round_id: u64,
    pub answer: Int128,
    pub decimals: u8,
    pub updated_at: Timestamp,
}
