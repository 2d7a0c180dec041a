use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{admin, deposit, ownership, purchase, registry, withdraw};
use crate::helpers::validate_addr;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG};

pub const CONTRACT_NAME: &str = "crates.io:token-sale";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.rate == 0 {
        return Err(ContractError::InvalidRate);
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidDenom {
            denom: msg.native_denom,
        });
    }

    let config = Config {
        owner: info.sender,
        rate: msg.rate,
        wallet: validate_addr(deps.api, &msg.wallet)?,
        token: validate_addr(deps.api, &msg.token)?,
        native_denom: msg.native_denom,
        total_raised_native: Uint128::zero(),
    };

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("token", config.token.to_string())
        .add_attribute("wallet", config.wallet.to_string())
        .add_attribute("rate", config.rate.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Buy {} => purchase::execute_buy(deps, env, info, None),
        ExecuteMsg::BuyTokens { beneficiary } => {
            purchase::execute_buy(deps, env, info, Some(beneficiary))
        }
        ExecuteMsg::DepositToken { token, amount } => {
            deposit::execute_deposit_token(deps, env, info, token, amount)
        }
        ExecuteMsg::Receive(cw20_msg) => deposit::execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::UpdateRate { rate } => admin::execute_update_rate(deps, info, rate),
        ExecuteMsg::UpdateWallet { wallet } => admin::execute_update_wallet(deps, info, wallet),
        ExecuteMsg::UpdateToken { token } => admin::execute_update_token(deps, info, token),
        ExecuteMsg::AddReceivedToken { token, name, rate } => {
            registry::execute_add_received_token(deps, info, token, name, rate)
        }
        ExecuteMsg::RemoveReceivedToken { token } => {
            registry::execute_remove_received_token(deps, info, token)
        }
        ExecuteMsg::SetReceivedTokenRate { token, rate } => {
            registry::execute_set_received_token_rate(deps, info, token, rate)
        }
        ExecuteMsg::WithdrawAnyAsset { asset } => {
            withdraw::execute_withdraw_any_asset(deps, env, info, asset)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            ownership::execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => ownership::execute_accept_ownership(deps, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let bin = match msg {
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::Rate {} => to_json_binary(&query::query_rate(deps)?),
        QueryMsg::Wallet {} => to_json_binary(&query::query_wallet(deps)?),
        QueryMsg::Token {} => to_json_binary(&query::query_token(deps)?),
        QueryMsg::TotalRaisedNative {} => to_json_binary(&query::query_total_raised(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query::query_pending_owner(deps)?),
        QueryMsg::ReceivedToken { token } => {
            to_json_binary(&query::query_received_token(deps, token)?)
        }
        QueryMsg::ReceivedTokens { start_after, limit } => {
            to_json_binary(&query::query_received_tokens(deps, start_after, limit)?)
        }
        QueryMsg::Quote { asset, amount } => {
            to_json_binary(&query::query_quote(deps, env, asset, amount)?)
        }
        QueryMsg::Status {} => to_json_binary(&query::query_status(deps, env)?),
    }?;
    Ok(bin)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            previous_contract: previous.contract,
            previous_version: previous.version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("previous_version", previous.version)
        .add_attribute("version", CONTRACT_VERSION))
}
