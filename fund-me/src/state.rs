use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw_storage_plus::{Deque, Item, Map};

#[cw_serde]
pub struct State {
    // Only this address may withdraw, set to the instantiating sender
    pub owner: Addr,
    // Oracle queried for the native-to-USD rate
    pub price_feed: Addr,
    pub denom: String,
    pub native_decimals: u8,
    // USD value with 18 decimals a single contribution must reach
    pub minimum_usd: Uint256,
}

pub const STATE: Item<State> = Item::new("state");

/// Cumulative amount funded by every address since the last withdrawal.
pub const ADDRESS_TO_AMOUNT_FUNDED: Map<&Addr, Uint128> = Map::new("address_to_amount_funded");

/// One entry per successful contribution, in order. An address funding twice appears twice.
pub const FUNDERS: Deque<Addr> = Deque::new("funders");
