use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Int128, Timestamp};

#[cw_serde]
pub struct InstantiateMsg {
    pub decimals: u8,
    pub initial_answer: Int128,
}

#[cw_serde]
pub enum ExecMsg {
    // Publishes a new answer and opens the next round.
    UpdateAnswer { answer: Int128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RoundDataResp)]
    LatestRoundData {},

    #[returns(DecimalsResp)]
    Decimals {},
}

#[cw_serde]
pub struct RoundDataResp {
    pub round_id: u64,
    pub answer: Int128,
    pub decimals: u8,
    pub updated_at: Timestamp,
}

#[cw_serde]
pub struct DecimalsResp {
    pub decimals: u8,
}
