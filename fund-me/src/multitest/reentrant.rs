//! Owner contract calling `Withdraw` a second time from the reply of its first
//! withdrawal, after the transfer landed but while the outer call is still running.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Reply, Response,
    StdError, StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw_multi_test::{App, ContractWrapper, Executor};
use cw_storage_plus::Item;

use crate::msg::{ExecMsg as FundMeExecMsg, FunderCountResp, QueryMsg as FundMeQueryMsg};

const FIRST_WITHDRAW_ID: u64 = 1;
const REENTRY_ID: u64 = 2;

#[cw_serde]
pub enum ExecMsg {
    Attack { fund_me: String },
}

#[cw_serde]
pub enum QueryMsg {
    Observed {},
}

#[cw_serde]
pub struct Observed {
    pub funders_at_reentry: u32,
    pub balance_at_reentry: Vec<Coin>,
    pub reentry_succeeded: bool,
    pub balance_after_reentry: Vec<Coin>,
}

const FUND_ME: Item<Addr> = Item::new("fund_me");
const OBSERVED: Item<Observed> = Item::new("observed");

fn withdraw_msg(fund_me: &Addr) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: fund_me.to_string(),
        msg: to_json_binary(&FundMeExecMsg::Withdraw {})?,
        funds: vec![],
    })
}

fn instantiate(_deps: DepsMut, _env: Env, _info: MessageInfo, _msg: Empty) -> StdResult<Response> {
    Ok(Response::new())
}

fn execute(deps: DepsMut, _env: Env, _info: MessageInfo, msg: ExecMsg) -> StdResult<Response> {
    match msg {
        ExecMsg::Attack { fund_me } => {
            let fund_me = deps.api.addr_validate(&fund_me)?;
            FUND_ME.save(deps.storage, &fund_me)?;

            let msg = SubMsg::reply_on_success(withdraw_msg(&fund_me)?, FIRST_WITHDRAW_ID);
            Ok(Response::new().add_submessage(msg))
        }
    }
}

fn reply(deps: DepsMut, env: Env, reply: Reply) -> StdResult<Response> {
    let fund_me = FUND_ME.load(deps.storage)?;

    match reply.id {
        FIRST_WITHDRAW_ID => {
            let funders: FunderCountResp = deps
                .querier
                .query_wasm_smart(&fund_me, &FundMeQueryMsg::FunderCount {})?;
            let balance = deps.querier.query_all_balances(&env.contract.address)?;

            OBSERVED.save(
                deps.storage,
                &Observed {
                    funders_at_reentry: funders.count,
                    balance_at_reentry: balance,
                    reentry_succeeded: false,
                    balance_after_reentry: vec![],
                },
            )?;

            let msg = SubMsg::reply_always(withdraw_msg(&fund_me)?, REENTRY_ID);
            Ok(Response::new().add_submessage(msg))
        }
        REENTRY_ID => {
            let balance = deps.querier.query_all_balances(&env.contract.address)?;

            OBSERVED.update(deps.storage, |mut observed| -> StdResult<_> {
                observed.reentry_succeeded = matches!(reply.result, SubMsgResult::Ok(_));
                observed.balance_after_reentry = balance;
                Ok(observed)
            })?;

            Ok(Response::new())
        }
        id => Err(StdError::generic_err(format!("unknown reply id {id}"))),
    }
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Observed {} => to_json_binary(&OBSERVED.load(deps.storage)?),
    }
}

pub struct ReentrantOwner(Addr);

impl ReentrantOwner {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn store_code(app: &mut App) -> u64 {
        let contract = ContractWrapper::new(execute, instantiate, query).with_reply(reply);
        app.store_code(Box::new(contract))
    }

    #[track_caller]
    pub fn instantiate(app: &mut App, code_id: u64, sender: &Addr) -> StdResult<Self> {
        app.instantiate_contract(
            code_id,
            sender.clone(),
            &Empty {},
            &[],
            "Reentrant owner",
            None,
        )
        .map(ReentrantOwner)
        .map_err(|err| err.downcast().unwrap())
    }

    #[track_caller]
    pub fn attack(&self, app: &mut App, sender: &Addr, fund_me: &Addr) -> StdResult<()> {
        app.execute_contract(
            sender.clone(),
            self.0.clone(),
            &ExecMsg::Attack {
                fund_me: fund_me.to_string(),
            },
            &[],
        )
        .map_err(|err| err.downcast().unwrap())
        .map(|_| ())
    }

    pub fn query_observed(&self, app: &App) -> StdResult<Observed> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Observed {})
    }
}
