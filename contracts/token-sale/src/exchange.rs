use cosmwasm_std::{Addr, CosmosMsg, Env, QuerierWrapper, Uint128};

use crate::error::ContractError;
use crate::rail::{Cw20Rail, PaymentRail};
use crate::state::Config;

/// How a single payment is split against the remaining supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fill {
    /// Payment kept and forwarded to the wallet.
    pub accepted: Uint128,
    /// Payment returned to the payer.
    pub excess: Uint128,
    /// Issued tokens sent to the beneficiary.
    pub issue: Uint128,
}

/// Split `value` (paid at `rate`) against `available` issued tokens.
///
/// When the supply cannot cover the whole payment the sale hands out the
/// entire remaining balance and keeps only `floor(available / rate)` of the
/// payment. The rounding dust goes to the buyer rather than staying stranded
/// in the contract.
pub fn compute_fill(value: Uint128, rate: u64, available: Uint128) -> Result<Fill, ContractError> {
    if value.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if rate == 0 {
        return Err(ContractError::InvalidRate);
    }
    if available.is_zero() {
        return Err(ContractError::SoldOut);
    }

    let rate = Uint128::from(rate);
    let wanted = value.checked_mul(rate)?;

    if wanted <= available {
        return Ok(Fill {
            accepted: value,
            excess: Uint128::zero(),
            issue: wanted,
        });
    }

    let accepted = available.checked_div(rate)?;
    let excess = value.checked_sub(accepted)?;

    Ok(Fill {
        accepted,
        excess,
        issue: available,
    })
}

/// Price a payment on `rail` and build the transfers that settle it.
///
/// Messages run in order: pull from payer (if any), forward to wallet,
/// refund excess to payer, issued tokens to beneficiary. Any failing message
/// reverts the whole transaction, storage writes included.
#[allow(clippy::too_many_arguments)]
pub fn exchange<R: PaymentRail>(
    querier: &QuerierWrapper,
    env: &Env,
    config: &Config,
    rail: &R,
    rate: u64,
    payer: &Addr,
    beneficiary: &Addr,
    value: Uint128,
) -> Result<(Fill, Vec<CosmosMsg>), ContractError> {
    if value.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    // Read the supply once; everything below is priced off this snapshot.
    let issued = Cw20Rail::held(config.token.clone());
    let available = issued.balance(querier, &env.contract.address)?;

    let fill = compute_fill(value, rate, available)?;

    let mut messages = vec![];
    if let Some(pull) = rail.pull(payer, &env.contract.address, value)? {
        messages.push(pull);
    }
    if !fill.accepted.is_zero() {
        messages.push(rail.push(&config.wallet, fill.accepted)?);
    }
    if !fill.excess.is_zero() {
        messages.push(rail.push(payer, fill.excess)?);
    }
    messages.push(issued.push(beneficiary, fill.issue)?);

    Ok((fill, messages))
}
