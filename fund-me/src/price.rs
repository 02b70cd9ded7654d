//! Conversion of native amounts into their USD value at the price feed's latest answer.
//!
//! Prices are handled as USD per whole native unit with [`PRICE_DECIMALS`]
//! decimals, whatever precision the feed reports with.

use std::cmp::Ordering;

use cosmwasm_std::{Addr, Deps, Int128, Uint128, Uint256, Uint512};

use crate::{
    error::ContractError,
    msg::{PriceFeedQueryMsg, RoundDataResp},
};

pub const PRICE_DECIMALS: u8 = 18;

/// Latest feed answer rescaled to [`PRICE_DECIMALS`].
///
/// An unreachable feed, a non-positive answer or an answer too small to survive
/// the rescaling all fail with [`ContractError::PriceFeedUnavailable`].
pub fn latest_price(deps: Deps, price_feed: &Addr) -> Result<Uint256, ContractError> {
    let round: RoundDataResp = deps
        .querier
        .query_wasm_smart(price_feed, &PriceFeedQueryMsg::LatestRoundData {})
        .map_err(|err| ContractError::PriceFeedUnavailable {
            reason: err.to_string(),
        })?;

    scale_answer(round.answer, round.decimals)
}

pub fn scale_answer(raw: Int128, decimals: u8) -> Result<Uint256, ContractError> {
    let answer = u128::try_from(raw.i128())
        .ok()
        .filter(|answer| *answer > 0)
        .map(Uint256::from)
        .ok_or_else(|| ContractError::PriceFeedUnavailable {
            reason: format!("invalid answer {raw}"),
        })?;

    let price = match decimals.cmp(&PRICE_DECIMALS) {
        Ordering::Equal => answer,
        Ordering::Less => answer.checked_mul(scaling_factor(PRICE_DECIMALS - decimals)?)?,
        Ordering::Greater => match scaling_factor(decimals - PRICE_DECIMALS) {
            Ok(divisor) => answer / divisor,
            // the divisor alone exceeds any representable answer
            Err(_) => Uint256::zero(),
        },
    };

    if price.is_zero() {
        return Err(ContractError::PriceFeedUnavailable {
            reason: format!("answer {raw} with {decimals} decimals truncates to zero"),
        });
    }

    Ok(price)
}

/// USD value (18 decimals) of `amount` smallest native units.
///
/// The product is computed on 512 bits so it cannot overflow; only the final
/// narrowing to 256 bits may fail, with [`ContractError::ArithmeticOverflow`].
pub fn to_usd(
    amount: Uint128,
    price: Uint256,
    native_decimals: u8,
) -> Result<Uint256, ContractError> {
    let scale = Uint512::from(scaling_factor(native_decimals)?);
    let usd = Uint512::from(amount.u128()).checked_mul(Uint512::from(price))? / scale;

    Ok(Uint256::try_from(usd)?)
}

/// `10^decimals`
pub fn scaling_factor(decimals: u8) -> Result<Uint256, ContractError> {
    Ok(Uint256::from(10u128).checked_pow(decimals.into())?)
}
