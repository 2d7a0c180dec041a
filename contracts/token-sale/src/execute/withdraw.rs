use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::helpers::{ensure_owner, validate_addr};
use crate::msg::AssetInfo;
use crate::rail::{Cw20Rail, NativeRail, PaymentRail};
use crate::state::CONFIG;

/// Owner: send the sale's whole balance of `asset` to the wallet.
///
/// Works for any asset, registered or not. Recovers coins or tokens that
/// reached the contract outside the purchase flow.
pub fn execute_withdraw_any_asset(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let (rail, label): (Box<dyn PaymentRail>, String) = match asset {
        AssetInfo::Native { denom } => {
            if denom.is_empty() {
                return Err(ContractError::InvalidDenom { denom });
            }
            (Box::new(NativeRail::new(denom.clone())), denom)
        }
        AssetInfo::Cw20 { address } => {
            let contract = validate_addr(deps.api, &address)?;
            (Box::new(Cw20Rail::held(contract.clone())), contract.to_string())
        }
    };

    let balance = rail.balance(&deps.querier, &env.contract.address)?;

    let mut res = Response::new();
    // Zero-amount bank sends and CW20 transfers both fail
    if !balance.is_zero() {
        res = res.add_message(rail.push(&config.wallet, balance)?);
    }

    Ok(res
        .add_attribute("action", "withdraw_tokens")
        .add_attribute("asset", label)
        .add_attribute("wallet", config.wallet.to_string())
        .add_attribute("amount", balance.to_string()))
}
