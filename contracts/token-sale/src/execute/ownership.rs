use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::helpers::{ensure_owner, validate_addr};
use crate::state::{CONFIG, PENDING_OWNER};

/// Owner: propose a new owner. Takes effect once they accept.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let new_owner = validate_addr(deps.api, &new_owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("pending_owner", new_owner.to_string()))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::Unauthorized)?;
    if info.sender != pending {
        return Err(ContractError::Unauthorized);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.owner, pending);
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_ownership")
        .add_attribute("previous_owner", previous.to_string())
        .add_attribute("owner", config.owner.to_string()))
}
