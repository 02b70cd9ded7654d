use cosmwasm_std::{Addr, Int128, StdResult};
use cw_multi_test::{App, ContractWrapper, Executor};

use crate::{
    execute, instantiate,
    msg::{DecimalsResp, ExecMsg, InstantiateMsg, QueryMsg, RoundDataResp},
    query,
};

pub struct MockPriceFeed(Addr);

impl MockPriceFeed {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn store_code(app: &mut App) -> u64 {
        let contract = ContractWrapper::new(execute, instantiate, query);
        app.store_code(Box::new(contract))
    }

    #[track_caller]
    pub fn instantiate(
        app: &mut App,
        code_id: u64,
        sender: &Addr,
        label: &str,
        decimals: u8,
        initial_answer: i128,
    ) -> StdResult<Self> {
        app.instantiate_contract(
            code_id,
            sender.clone(),
            &InstantiateMsg {
                decimals,
                initial_answer: Int128::new(initial_answer),
            },
            &[],
            label,
            None,
        )
        .map(MockPriceFeed)
        .map_err(|err| err.downcast().unwrap())
    }

    #[track_caller]
    pub fn update_answer(&self, app: &mut App, sender: &Addr, answer: i128) -> StdResult<()> {
        app.execute_contract(
            sender.clone(),
            self.0.clone(),
            &ExecMsg::UpdateAnswer {
                answer: Int128::new(answer),
            },
            &[],
        )
        .map_err(|err| err.downcast().unwrap())
        .map(|_| ())
    }

    pub fn query_latest_round_data(&self, app: &App) -> StdResult<RoundDataResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::LatestRoundData {})
    }

    pub fn query_decimals(&self, app: &App) -> StdResult<DecimalsResp> {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Decimals {})
    }
}

impl From<MockPriceFeed> for Addr {
    fn from(contract: MockPriceFeed) -> Self {
        contract.0
    }
}
