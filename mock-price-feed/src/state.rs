use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Int128, Timestamp};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Round {
    pub round_id: u64,
    pub answer: Int128,
    pub updated_at: Timestamp,
}

// Number of decimals the answers are reported with, fixed at instantiation
pub const DECIMALS: Item<u8> = Item::new("decimals");

pub const LATEST_ROUND: Item<Round> = Item::new("latest_round");
