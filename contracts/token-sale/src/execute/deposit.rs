use cosmwasm_std::{from_json, Addr, DepsMut, Env, Event, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::exchange::exchange;
use crate::helpers::validate_addr;
use crate::msg::ReceiveMsg;
use crate::rail::Cw20Rail;
use crate::state::{CONFIG, RECEIVED_TOKENS};

/// Pay with an accepted CW20 token through a pre-granted allowance.
/// The sender is both payer and beneficiary.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    let token = validate_addr(deps.api, &token)?;
    let rail = Cw20Rail::allowance(token);

    purchase_with_token(deps, env, &rail, &info.sender, &info.sender, amount)
}

/// CW20 receive hook. The calling contract is the token being sent.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let payer = deps.api.addr_validate(&cw20_msg.sender)?;

    let msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match msg {
        ReceiveMsg::Fund {} => {
            let config = CONFIG.load(deps.storage)?;
            // Only the issued token can top up the supply
            if info.sender != config.token {
                return Err(ContractError::TokenNotReceived {
                    token: info.sender.to_string(),
                });
            }

            Ok(Response::new()
                .add_attribute("action", "fund")
                .add_attribute("funder", payer.to_string())
                .add_attribute("amount", cw20_msg.amount.to_string()))
        }
        ReceiveMsg::Purchase { beneficiary } => {
            let beneficiary = match beneficiary {
                Some(addr) => validate_addr(deps.api, &addr)?,
                None => payer.clone(),
            };
            let rail = Cw20Rail::held(info.sender);

            purchase_with_token(deps, env, &rail, &payer, &beneficiary, cw20_msg.amount)
        }
    }
}

fn purchase_with_token(
    deps: DepsMut,
    env: Env,
    rail: &Cw20Rail,
    payer: &Addr,
    beneficiary: &Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let mut record = RECEIVED_TOKENS
        .may_load(deps.storage, &rail.contract)?
        .ok_or_else(|| ContractError::TokenNotReceived {
            token: rail.contract.to_string(),
        })?;

    let (fill, messages) = exchange(
        &deps.querier,
        &env,
        &config,
        rail,
        record.rate,
        payer,
        beneficiary,
        amount,
    )?;

    record.raised = record.raised.checked_add(fill.accepted)?;
    RECEIVED_TOKENS.save(deps.storage, &rail.contract, &record)?;

    let token = rail.contract.to_string();
    let mut res = Response::new()
        .add_messages(messages)
        .add_attribute("action", "token_for_token_purchase")
        .add_attribute("token", token.clone())
        .add_attribute("purchaser", payer.to_string())
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("value", fill.accepted.to_string())
        .add_attribute("amount", fill.issue.to_string())
        .add_event(
            Event::new("token_for_token_purchase")
                .add_attribute("token", token.clone())
                .add_attribute("purchaser", payer.to_string())
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("value", fill.accepted.to_string())
                .add_attribute("amount", fill.issue.to_string()),
        );

    if !fill.excess.is_zero() {
        res = res
            .add_attribute("excess", fill.excess.to_string())
            .add_event(
                Event::new("send_tokens_excess")
                    .add_attribute("token", token)
                    .add_attribute("beneficiary", payer.to_string())
                    .add_attribute("value", fill.excess.to_string()),
            );
    }

    Ok(res)
}
