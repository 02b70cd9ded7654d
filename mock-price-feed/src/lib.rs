#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use msg::{ExecMsg, InstantiateMsg, QueryMsg};

mod contract;
pub mod msg;
#[cfg(any(test, feature = "tests"))]
pub mod multitest;
mod state;

// Stores the feed precision and the first answer (round 1)
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    contract::instantiate(deps, env, info, msg.decimals, msg.initial_answer)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecMsg) -> StdResult<Response> {
    use contract::exec;
    use ExecMsg::*;

    match msg {
        UpdateAnswer { answer } => exec::update_answer(deps, env, info, answer),
    }
}

// Read-only access to the latest round, in the shape price consumers expect
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use contract::query;
    use QueryMsg::*;

    match msg {
        LatestRoundData {} => to_json_binary(&query::latest_round_data(deps)?),
        Decimals {} => to_json_binary(&query::decimals(deps)?),
    }
}
