use cosmwasm_std::{DepsMut, Env, Int128, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::state::{Round, DECIMALS, LATEST_ROUND};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    decimals: u8,
    initial_answer: Int128,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    DECIMALS.save(deps.storage, &decimals)?;
    LATEST_ROUND.save(
        deps.storage,
        &Round {
            round_id: 1,
            answer: initial_answer,
            updated_at: env.block.time,
        },
    )?;

    let resp = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("decimals", decimals.to_string())
        .add_attribute("answer", initial_answer.to_string());

    Ok(resp)
}

pub mod query {
    use cosmwasm_std::{Deps, StdResult};

    use crate::{
        msg::{DecimalsResp, RoundDataResp},
        state::{DECIMALS, LATEST_ROUND},
    };

    pub fn latest_round_data(deps: Deps) -> StdResult<RoundDataResp> {
        let round = LATEST_ROUND.load(deps.storage)?;
        let decimals = DECIMALS.load(deps.storage)?;

        Ok(RoundDataResp {
            round_id: round.round_id,
            answer: round.answer,
            decimals,
            updated_at: round.updated_at,
        })
    }

    pub fn decimals(deps: Deps) -> StdResult<DecimalsResp> {
        let decimals = DECIMALS.load(deps.storage)?;

        Ok(DecimalsResp { decimals })
    }
}

pub mod exec {
    use cosmwasm_std::{DepsMut, Env, Int128, MessageInfo, Response, StdResult};

    use crate::state::{Round, LATEST_ROUND};

    // Anyone may move the price: this feed only stands in for a real oracle in tests.
    pub fn update_answer(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        answer: Int128,
    ) -> StdResult<Response> {
        let round = LATEST_ROUND.update(deps.storage, |round| -> StdResult<_> {
            Ok(Round {
                round_id: round.round_id + 1,
                answer,
                updated_at: env.block.time,
            })
        })?;

        let resp = Response::new()
            .add_attribute("action", "update_answer")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("round_id", round.round_id.to_string())
            .add_attribute("answer", answer.to_string());

        Ok(resp)
    }
}
