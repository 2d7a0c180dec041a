#[cfg(test)]
pub mod helpers {
    use std::collections::HashMap;

    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
        MOCK_CONTRACT_ADDR,
    };
    use cosmwasm_std::{
        coins, from_json, to_json_binary, BankMsg, Coin, ContractResult, CosmosMsg, Env, Event,
        OwnedDeps, Response, SystemError, SystemResult, Uint128, WasmMsg, WasmQuery,
    };
    use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::*;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    pub const OWNER: &str = "owner";
    pub const LEDGER: &str = "ledger";
    pub const ISSUED_TOKEN: &str = "qod_token";
    pub const DENOM: &str = "uaxm";
    pub const USER1: &str = "user_one";
    pub const USER2: &str = "user_two";
    pub const BENEFICIARY: &str = "beneficiary";
    pub const TEST_TOKEN1: &str = "test_token_one";
    pub const TEST_TOKEN2: &str = "test_token_two";
    pub const TEST_TOKEN3: &str = "test_token_three";

    pub const E18: u128 = 1_000_000_000_000_000_000;
    pub const INIT_RATE: u64 = 1200;
    /// 500 000 tokens with 18 decimals
    pub const TOKENS_FOR_SALE: u128 = 500_000 * E18;

    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            rate: INIT_RATE,
            wallet: LEDGER.to_string(),
            token: ISSUED_TOKEN.to_string(),
            native_denom: DENOM.to_string(),
        }
    }

    /// Instantiated sale holding `TOKENS_FOR_SALE` issued tokens.
    pub fn setup_contract() -> (MockDeps, Env) {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info(OWNER, &[]);

        let res = instantiate(deps.as_mut(), env.clone(), info, default_instantiate_msg()).unwrap();
        assert_eq!(res.attributes.len(), 5);

        set_cw20_balances(&mut deps, &[(ISSUED_TOKEN, MOCK_CONTRACT_ADDR, TOKENS_FOR_SALE)]);

        (deps, env)
    }

    /// Answer CW20 `Balance` queries from a fixed table of
    /// (token contract, holder, balance). Missing entries are zero.
    pub fn set_cw20_balances(deps: &mut MockDeps, balances: &[(&str, &str, u128)]) {
        let table: HashMap<(String, String), Uint128> = balances
            .iter()
            .map(|(token, holder, amount)| {
                ((token.to_string(), holder.to_string()), Uint128::new(*amount))
            })
            .collect();

        deps.querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } => match from_json::<Cw20QueryMsg>(msg) {
                Ok(Cw20QueryMsg::Balance { address }) => {
                    let balance = table
                        .get(&(contract_addr.clone(), address))
                        .copied()
                        .unwrap_or_default();
                    SystemResult::Ok(ContractResult::Ok(
                        to_json_binary(&BalanceResponse { balance }).unwrap(),
                    ))
                }
                _ => SystemResult::Err(SystemError::UnsupportedRequest {
                    kind: "cw20 query".to_string(),
                }),
            },
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: "wasm query".to_string(),
            }),
        });
    }

    pub fn exec(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        funds: &[Coin],
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        execute(deps.as_mut(), env.clone(), mock_info(sender, funds), msg)
    }

    pub fn buy(deps: &mut MockDeps, env: &Env, sender: &str, amount: u128) -> Result<Response, ContractError> {
        exec(deps, env, sender, &coins(amount, DENOM), ExecuteMsg::Buy {})
    }

    pub fn buy_tokens(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        beneficiary: &str,
        amount: u128,
    ) -> Result<Response, ContractError> {
        exec(
            deps,
            env,
            sender,
            &coins(amount, DENOM),
            ExecuteMsg::BuyTokens {
                beneficiary: beneficiary.to_string(),
            },
        )
    }

    pub fn deposit_token(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        token: &str,
        amount: u128,
    ) -> Result<Response, ContractError> {
        exec(
            deps,
            env,
            sender,
            &[],
            ExecuteMsg::DepositToken {
                token: token.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    pub fn add_received_token(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        token: &str,
        name: &str,
        rate: u64,
    ) -> Result<Response, ContractError> {
        exec(
            deps,
            env,
            sender,
            &[],
            ExecuteMsg::AddReceivedToken {
                token: token.to_string(),
                name: name.to_string(),
                rate,
            },
        )
    }

    pub fn query_config(deps: &MockDeps, env: &Env) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(res).unwrap()
    }

    pub fn query_received_token(deps: &MockDeps, env: &Env, token: &str) -> ReceivedTokenResponse {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::ReceivedToken {
                token: token.to_string(),
            },
        )
        .unwrap();
        from_json(res).unwrap()
    }

    pub fn find_event<'a>(res: &'a Response, ty: &str) -> Option<&'a Event> {
        res.events.iter().find(|e| e.ty == ty)
    }

    pub fn event_attr<'a>(event: &'a Event, key: &str) -> &'a str {
        event
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
            .unwrap_or_else(|| panic!("event {} has no attribute {}", event.ty, key))
    }

    pub fn bank_send(to: &str, amount: u128) -> CosmosMsg {
        CosmosMsg::Bank(BankMsg::Send {
            to_address: to.to_string(),
            amount: coins(amount, DENOM),
        })
    }

    pub fn cw20_transfer(token: &str, recipient: &str, amount: u128) -> CosmosMsg {
        cw20_execute(
            token,
            &Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    pub fn cw20_transfer_from(token: &str, owner: &str, amount: u128) -> CosmosMsg {
        cw20_execute(
            token,
            &Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: MOCK_CONTRACT_ADDR.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    fn cw20_execute(token: &str, msg: &Cw20ExecuteMsg) -> CosmosMsg {
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(msg).unwrap(),
            funds: vec![],
        })
    }

    pub fn messages(res: &Response) -> Vec<CosmosMsg> {
        res.messages.iter().map(|m| m.msg.clone()).collect()
    }
}
