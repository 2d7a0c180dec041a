use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::exchange::exchange;
use crate::helpers::{native_payment, validate_addr};
use crate::rail::NativeRail;
use crate::state::CONFIG;

/// Buy issued tokens with attached native funds.
///
/// `beneficiary` defaults to the sender. Excess funds are always refunded
/// to the sender, whoever the beneficiary is.
pub fn execute_buy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: Option<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    let value = native_payment(&info, &config.native_denom)?;
    let beneficiary = match beneficiary {
        Some(addr) => validate_addr(deps.api, &addr)?,
        None => info.sender.clone(),
    };

    let rail = NativeRail::new(config.native_denom.clone());
    let (fill, messages) = exchange(
        &deps.querier,
        &env,
        &config,
        &rail,
        config.rate,
        &info.sender,
        &beneficiary,
        value,
    )?;

    config.total_raised_native = config.total_raised_native.checked_add(fill.accepted)?;
    CONFIG.save(deps.storage, &config)?;

    let mut res = Response::new()
        .add_messages(messages)
        .add_attribute("action", "token_purchase")
        .add_attribute("purchaser", info.sender.to_string())
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("value", fill.accepted.to_string())
        .add_attribute("amount", fill.issue.to_string())
        .add_event(
            Event::new("token_purchase")
                .add_attribute("purchaser", info.sender.to_string())
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("value", fill.accepted.to_string())
                .add_attribute("amount", fill.issue.to_string()),
        );

    if !fill.excess.is_zero() {
        res = res
            .add_attribute("excess", fill.excess.to_string())
            .add_event(
                Event::new("send_ether_excess")
                    .add_attribute("beneficiary", info.sender.to_string())
                    .add_attribute("value", fill.excess.to_string()),
            );
    }

    Ok(res)
}
