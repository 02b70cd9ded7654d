use cosmwasm_schema::write_api;

use fund_me::msg::{ExecMsg, InstantiateMsg, MigrateMsg, QueryMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    }
}
