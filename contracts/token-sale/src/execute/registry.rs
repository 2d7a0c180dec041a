use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::helpers::{ensure_owner, validate_addr};
use crate::state::{ReceivedToken, CONFIG, RECEIVED_TOKENS};

/// Owner: accept a CW20 token as payment.
///
/// Always writes a fresh record, so re-adding a token starts `raised` at 0.
pub fn execute_add_received_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    name: String,
    rate: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let token = validate_addr(deps.api, &token)?;
    if rate == 0 {
        return Err(ContractError::InvalidRate);
    }

    let record = ReceivedToken {
        name,
        rate,
        raised: Uint128::zero(),
    };
    RECEIVED_TOKENS.save(deps.storage, &token, &record)?;

    Ok(Response::new()
        .add_attribute("action", "add_received_token")
        .add_attribute("token", token.to_string())
        .add_attribute("name", record.name.clone())
        .add_attribute("rate", rate.to_string())
        .add_event(
            Event::new("add_received_token")
                .add_attribute("token", token.to_string())
                .add_attribute("name", record.name)
                .add_attribute("rate", rate.to_string()),
        ))
}

/// Owner: stop accepting a token. Removing an unknown token succeeds.
pub fn execute_remove_received_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let token = validate_addr(deps.api, &token)?;
    RECEIVED_TOKENS.remove(deps.storage, &token);

    Ok(Response::new()
        .add_attribute("action", "remove_received_token")
        .add_attribute("token", token.to_string())
        .add_event(Event::new("remove_received_token").add_attribute("token", token.to_string())))
}

/// Owner: change the rate of an accepted token.
pub fn execute_set_received_token_rate(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    rate: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let token = validate_addr(deps.api, &token)?;
    if rate == 0 {
        return Err(ContractError::InvalidRate);
    }

    let mut record = RECEIVED_TOKENS
        .may_load(deps.storage, &token)?
        .ok_or_else(|| ContractError::TokenNotReceived {
            token: token.to_string(),
        })?;
    record.rate = rate;
    RECEIVED_TOKENS.save(deps.storage, &token, &record)?;

    Ok(Response::new()
        .add_attribute("action", "set_received_token_rate")
        .add_attribute("token", token.to_string())
        .add_attribute("new_rate", rate.to_string())
        .add_event(
            Event::new("set_received_token_rate")
                .add_attribute("token", token.to_string())
                .add_attribute("new_rate", rate.to_string()),
        ))
}
