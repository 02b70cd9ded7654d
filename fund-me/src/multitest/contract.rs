use cosmwasm_std::{Addr, Coin, StdResult, Uint128, Uint256};
use cw_multi_test::{App, ContractWrapper, Executor};

use crate::{
    error::ContractError,
    execute, instantiate, migrate,
    msg::{
        AmountFundedResp, ConversionRateResp, ExecMsg, FunderCountResp, FunderResp,
        InstantiateMsg, MigrateMsg, MinimumUsdResp, OwnerResp, PriceFeedResp, PriceResp,
        QueryMsg,
    },
    query, reply,
};

pub struct FundMeContract(Addr);

impl FundMeContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn store_code(app: &mut App) -> u64 {
        let contract = ContractWrapper::new(execute, instantiate, query)
            .with_reply(reply)
            .with_migrate(migrate);
        app.store_code(Box::new(contract))
    }

    #[track_caller]
    #[allow(clippy::too_many_arguments)]
    pub fn instantiate<'a>(
        app: &mut App,
        code_id: u64,
        sender: &Addr,
        label: &str,
        admin: impl Into<Option<&'a Addr>>,
        price_feed: &Addr,
        denom: &str,
        native_decimals: impl Into<Option<u8>>,
        minimum_usd: impl Into<Option<Uint256>>,
    ) -> Result<Self, ContractError> {
        let admin = admin.into();

        app.instantiate_contract(
            code_id,
            sender.clone(),
            &InstantiateMsg {
                price_feed: price_feed.to_string(),
                denom: denom.to_owned(),
                native_decimals: native_decimals.into(),
                minimum_usd: minimum_usd.into(),
            },
            &[],
            label,
            admin.map(Addr::to_string),
        )
        .map(FundMeContract)
        .map_err(|err| err.downcast().unwrap())
    }

    #[track_caller]
    pub fn fund(&self, app: &mut App, sender: &Addr, funds: &[Coin]) -> Result<(), ContractError> {
        app.execute_contract(sender.clone(), self.0.clone(), &ExecMsg::Fund {}, funds)
            .map_err(|err| err.downcast().unwrap())
            .map(|_| ())
    }

    #[track_caller]
    pub fn withdraw(&self, app: &mut App, sender: &Addr) -> Result<(), ContractError> {
        app.execute_contract(sender.clone(), self.0.clone(), &ExecMsg::Withdraw {}, &[])
            .map_err(|err| err.downcast().unwrap())
            .map(|_| ())
    }

    #[track_caller]
    pub fn cheaper_withdraw(&self, app: &mut App, sender: &Addr) -> Result<(), ContractError> {
        app.execute_contract(
            sender.clone(),
            self.0.clone(),
            &ExecMsg::CheaperWithdraw {},
            &[],
        )
        .map_err(|err| err.downcast().unwrap())
        .map(|_| ())
    }

    #[track_caller]
    pub fn migrate(
        app: &mut App,
        contract: Addr,
        code_id: u64,
        sender: &Addr,
    ) -> Result<Self, ContractError> {
        app.migrate_contract(sender.clone(), contract.clone(), &MigrateMsg {}, code_id)
            .map_err(|err| err.downcast().unwrap())
            .map(|_| Self(contract))
    }

    pub fn query_price_feed(&self, app: &App) -> StdResult<PriceFeedResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::PriceFeed {})
    }

    pub fn query_owner(&self, app: &App) -> StdResult<OwnerResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Owner {})
    }

    pub fn query_minimum_usd(&self, app: &App) -> StdResult<MinimumUsdResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::MinimumUsd {})
    }

    pub fn query_amount_funded(&self, app: &App, address: &Addr) -> StdResult<AmountFundedResp> {
        app.wrap().query_wasm_smart(
            self.0.clone(),
            &QueryMsg::AddressToAmountFunded {
                address: address.to_string(),
            },
        )
    }

    pub fn query_funder(&self, app: &App, index: u64) -> StdResult<FunderResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Funder { index })
    }

    pub fn query_funder_count(&self, app: &App) -> StdResult<FunderCountResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::FunderCount {})
    }

    pub fn query_latest_price(&self, app: &App) -> StdResult<PriceResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::LatestPrice {})
    }

    pub fn query_conversion_rate(&self, app: &App, amount: u128) -> StdResult<ConversionRateResp> {
        app.wrap().query_wasm_smart(
            self.0.clone(),
            &QueryMsg::ConversionRate {
                amount: Uint128::new(amount),
            },
        )
    }
}

impl From<FundMeContract> for Addr {
    fn from(contract: FundMeContract) -> Self {
        contract.0
    }
}
