use cosmwasm_std::{DepsMut, MessageInfo, Reply, Response, Uint256};
use cw2::{get_contract_version, set_contract_version};

use crate::{
    error::ContractError,
    price,
    state::{State, STATE},
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 50 USD with 18 decimals.
pub const MINIMUM_USD: u128 = 50 * 10u128.pow(18);
pub const NATIVE_DECIMALS: u8 = 18;

pub const WITHDRAW_REPLY_ID: u64 = 1;

pub fn instantiate(
    deps: DepsMut,
    info: MessageInfo,
    price_feed: String,
    denom: String,
    native_decimals: Option<u8>,
    minimum_usd: Option<Uint256>,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let price_feed = deps.api.addr_validate(&price_feed)?;
    let native_decimals = native_decimals.unwrap_or(NATIVE_DECIMALS);
    let minimum_usd = minimum_usd.unwrap_or_else(|| Uint256::from(MINIMUM_USD));

    // conversions divide by 10^native_decimals, which has to fit 256 bits
    price::scaling_factor(native_decimals)?;

    let resp = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("price_feed", price_feed.as_str())
        .add_attribute("denom", denom.as_str())
        .add_attribute("minimum_usd", minimum_usd.to_string());

    STATE.save(
        deps.storage,
        &State {
            owner: info.sender,
            price_feed,
            denom,
            native_decimals,
            minimum_usd,
        },
    )?;

    Ok(resp)
}

pub fn migrate(deps: DepsMut) -> Result<Response, ContractError> {
    let contract_version = get_contract_version(deps.storage)?;

    if contract_version.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidContract {
            contract: contract_version.contract,
        });
    }

    // no earlier layout exists yet, only a same-version code swap is accepted
    if contract_version.version != CONTRACT_VERSION {
        return Err(ContractError::InvalidContractVersion {
            version: contract_version.version,
        });
    }

    Ok(Response::new().add_attribute("action", "migrate"))
}

pub fn reply(_deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        WITHDRAW_REPLY_ID => match reply.result.into_result() {
            Ok(_) => Ok(Response::new()),
            Err(reason) => Err(ContractError::TransferFailed { reason }),
        },
        id => Err(ContractError::UnknownReply { id }),
    }
}

pub mod query {
    use cosmwasm_std::{Deps, StdResult, Uint128};

    use crate::{
        error::ContractError,
        msg::{
            AmountFundedResp, ConversionRateResp, FunderCountResp, FunderResp, MinimumUsdResp,
            OwnerResp, PriceFeedResp, PriceResp,
        },
        price,
        state::{ADDRESS_TO_AMOUNT_FUNDED, FUNDERS, STATE},
    };

    pub fn price_feed(deps: Deps) -> StdResult<PriceFeedResp> {
        let price_feed = STATE.load(deps.storage)?.price_feed;

        Ok(PriceFeedResp { price_feed })
    }

    pub fn owner(deps: Deps) -> StdResult<OwnerResp> {
        let owner = STATE.load(deps.storage)?.owner;

        Ok(OwnerResp { owner })
    }

    pub fn minimum_usd(deps: Deps) -> StdResult<MinimumUsdResp> {
        let minimum_usd = STATE.load(deps.storage)?.minimum_usd;

        Ok(MinimumUsdResp { minimum_usd })
    }

    // Addresses that never funded, or were reset by a withdrawal, read as zero
    pub fn address_to_amount_funded(deps: Deps, address: String) -> StdResult<AmountFundedResp> {
        let address = deps.api.addr_validate(&address)?;
        let amount = ADDRESS_TO_AMOUNT_FUNDED
            .may_load(deps.storage, &address)?
            .unwrap_or_default();

        Ok(AmountFundedResp { amount })
    }

    pub fn funder(deps: Deps, index: u64) -> Result<FunderResp, ContractError> {
        let len = FUNDERS.len(deps.storage)?;
        let out_of_range = || ContractError::IndexOutOfRange { index, len };

        let position = u32::try_from(index).map_err(|_| out_of_range())?;
        if position >= len {
            return Err(out_of_range());
        }

        let funder = FUNDERS
            .get(deps.storage, position)?
            .ok_or_else(out_of_range)?;

        Ok(FunderResp { funder })
    }

    pub fn funder_count(deps: Deps) -> StdResult<FunderCountResp> {
        let count = FUNDERS.len(deps.storage)?;

        Ok(FunderCountResp { count })
    }

    pub fn latest_price(deps: Deps) -> Result<PriceResp, ContractError> {
        let state = STATE.load(deps.storage)?;
        let price = price::latest_price(deps, &state.price_feed)?;

        Ok(PriceResp { price })
    }

    pub fn conversion_rate(deps: Deps, amount: Uint128) -> Result<ConversionRateResp, ContractError> {
        let state = STATE.load(deps.storage)?;
        let price = price::latest_price(deps, &state.price_feed)?;
        let usd = price::to_usd(amount, price, state.native_decimals)?;

        Ok(ConversionRateResp { usd })
    }
}

pub mod exec {
    use cosmwasm_std::{
        Addr, BankMsg, Coin, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Storage,
        SubMsg, Uint128,
    };

    use crate::{
        error::ContractError,
        price,
        state::{ADDRESS_TO_AMOUNT_FUNDED, FUNDERS, STATE},
    };

    use super::WITHDRAW_REPLY_ID;

    pub fn fund(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
        let state = STATE.load(deps.storage)?;
        let amount = paid_amount(&info.funds, &state.denom)?;

        // an unusable feed cannot vouch for the contribution, so it is simply not enough
        let price = price::latest_price(deps.as_ref(), &state.price_feed).map_err(|err| match err {
            ContractError::PriceFeedUnavailable { .. } => ContractError::InsufficientContribution {
                minimum_usd: state.minimum_usd,
            },
            err => err,
        })?;

        let usd_value = price::to_usd(amount, price, state.native_decimals)?;
        if usd_value < state.minimum_usd {
            return Err(ContractError::InsufficientContribution {
                minimum_usd: state.minimum_usd,
            });
        }

        ADDRESS_TO_AMOUNT_FUNDED.update(
            deps.storage,
            &info.sender,
            |funded| -> Result<_, ContractError> {
                Ok(funded.unwrap_or_default().checked_add(amount)?)
            },
        )?;
        FUNDERS.push_back(deps.storage, &info.sender)?;

        let resp = Response::new()
            .add_attribute("action", "fund")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("amount", amount.to_string())
            .add_attribute("usd_value", usd_value.to_string());

        Ok(resp)
    }

    pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
        let owner = ensure_owner(deps.as_ref(), &info)?;

        // the funders list length is read from storage on every step
        let mut index = 0;
        while index < FUNDERS.len(deps.storage)? {
            if let Some(funder) = FUNDERS.get(deps.storage, index)? {
                ADDRESS_TO_AMOUNT_FUNDED.remove(deps.storage, &funder);
            }
            index += 1;
        }
        let cleared = clear_funders(deps.storage)?;

        let resp = Response::new()
            .add_attribute("action", "withdraw")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("funders_cleared", cleared.to_string());

        transfer_balance(deps.as_ref(), &env, &owner, resp)
    }

    pub fn cheaper_withdraw(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
    ) -> Result<Response, ContractError> {
        let owner = ensure_owner(deps.as_ref(), &info)?;

        let funders: Vec<Addr> = FUNDERS.iter(deps.storage)?.collect::<StdResult<_>>()?;
        for funder in &funders {
            ADDRESS_TO_AMOUNT_FUNDED.remove(deps.storage, funder);
        }
        let cleared = clear_funders(deps.storage)?;

        let resp = Response::new()
            .add_attribute("action", "cheaper_withdraw")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("funders_cleared", cleared.to_string());

        transfer_balance(deps.as_ref(), &env, &owner, resp)
    }

    fn ensure_owner(deps: Deps, info: &MessageInfo) -> Result<Addr, ContractError> {
        let owner = STATE.load(deps.storage)?.owner;
        if info.sender != owner {
            return Err(ContractError::Unauthorized {
                owner: owner.to_string(),
            });
        }

        Ok(owner)
    }

    fn paid_amount(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
        funds.iter().try_fold(Uint128::zero(), |total, coin| {
            if coin.denom != denom {
                return Err(ContractError::UnsupportedDenom {
                    denom: coin.denom.clone(),
                });
            }

            Ok(total.checked_add(coin.amount)?)
        })
    }

    fn clear_funders(storage: &mut dyn Storage) -> StdResult<u32> {
        let mut cleared = 0;
        while FUNDERS.pop_front(storage)?.is_some() {
            cleared += 1;
        }

        Ok(cleared)
    }

    // Must run after the ledger reset: the transfer is the only call leaving the contract.
    fn transfer_balance(
        deps: Deps,
        env: &Env,
        owner: &Addr,
        resp: Response,
    ) -> Result<Response, ContractError> {
        let balance: Vec<Coin> = deps
            .querier
            .query_all_balances(&env.contract.address)?
            .into_iter()
            .filter(|coin| !coin.amount.is_zero())
            .collect();

        if balance.is_empty() {
            return Ok(resp.add_attribute("withdrawn", "0"));
        }

        let withdrawn = balance
            .iter()
            .map(Coin::to_string)
            .collect::<Vec<_>>()
            .join(",");

        // here msg.sender is this contract
        let bank_msg = BankMsg::Send {
            to_address: owner.to_string(),
            amount: balance,
        };

        let resp = resp
            .add_submessage(SubMsg::reply_on_error(bank_msg, WITHDRAW_REPLY_ID))
            .add_attribute("withdrawn", withdrawn);

        Ok(resp)
    }
}
