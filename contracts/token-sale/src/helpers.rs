use cosmwasm_std::{Addr, Api, MessageInfo, Uint128};

use crate::error::ContractError;
use crate::state::Config;

/// Validate a user-supplied address. Empty or malformed input is an
/// `InvalidAddress`, never a generic std error.
pub fn validate_addr(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if address.is_empty() {
        return Err(ContractError::InvalidAddress {
            address: address.to_string(),
        });
    }
    api.addr_validate(address)
        .map_err(|_| ContractError::InvalidAddress {
            address: address.to_string(),
        })
}

pub fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Amount of `denom` attached to the message. Exactly one coin is allowed.
pub fn native_payment(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [] => Err(ContractError::ZeroAmount),
        [coin] if coin.denom != denom => Err(ContractError::InvalidDenom {
            denom: coin.denom.clone(),
        }),
        [coin] => Ok(coin.amount),
        _ => Err(ContractError::MultipleDenoms),
    }
}
