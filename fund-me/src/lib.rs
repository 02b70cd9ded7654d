#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response};
use error::ContractError;
use msg::{ExecMsg, InstantiateMsg, MigrateMsg, QueryMsg};

mod contract;
pub mod error;
pub mod msg;
#[cfg(any(test, feature = "tests"))]
pub mod multitest;
pub mod price;
mod state;

// Define the `instantiate` entry point function, which is called when a new contract is deployed to the blockchain
// The sender becomes the owner, the only address allowed to withdraw.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    contract::instantiate(
        deps,
        info,
        msg.price_feed,
        msg.denom,
        msg.native_decimals,
        msg.minimum_usd,
    )
}

// Define the `query` entry point function, which is called when a read-only operation is performed on the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    use contract::query;
    use QueryMsg::*;

    let resp = match msg {
        PriceFeed {} => to_json_binary(&query::price_feed(deps)?)?,
        AddressToAmountFunded { address } => {
            to_json_binary(&query::address_to_amount_funded(deps, address)?)?
        }
        Funder { index } => to_json_binary(&query::funder(deps, index)?)?,
        FunderCount {} => to_json_binary(&query::funder_count(deps)?)?,
        Owner {} => to_json_binary(&query::owner(deps)?)?,
        MinimumUsd {} => to_json_binary(&query::minimum_usd(deps)?)?,
        LatestPrice {} => to_json_binary(&query::latest_price(deps)?)?,
        ConversionRate { amount } => to_json_binary(&query::conversion_rate(deps, amount)?)?,
    };

    Ok(resp)
}

// Define the `execute` entry point function, which is called when a write operation is performed on the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecMsg,
) -> Result<Response, ContractError> {
    use contract::exec;
    use ExecMsg::*;

    match msg {
        Fund {} => exec::fund(deps, info),
        Withdraw {} => exec::withdraw(deps, env, info),
        CheaperWithdraw {} => exec::cheaper_withdraw(deps, env, info),
    }
}

// Called back when the withdrawal transfer fails, failing it aborts the whole withdrawal
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    contract::reply(deps, reply)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    contract::migrate(deps)
}
