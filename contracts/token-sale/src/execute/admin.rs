use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::helpers::{ensure_owner, validate_addr};
use crate::state::CONFIG;

/// Owner: change the native rate.
pub fn execute_update_rate(
    deps: DepsMut,
    info: MessageInfo,
    rate: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if rate == 0 {
        return Err(ContractError::InvalidRate);
    }
    config.rate = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_rate")
        .add_attribute("new_rate", rate.to_string())
        .add_event(Event::new("change_rate").add_attribute("new_rate", rate.to_string())))
}

/// Owner: change where proceeds are forwarded.
pub fn execute_update_wallet(
    deps: DepsMut,
    info: MessageInfo,
    wallet: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.wallet = validate_addr(deps.api, &wallet)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_wallet")
        .add_attribute("wallet", config.wallet.to_string()))
}

/// Owner: point the sale at another issued token contract.
pub fn execute_update_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.token = validate_addr(deps.api, &token)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_token")
        .add_attribute("token", config.token.to_string()))
}
