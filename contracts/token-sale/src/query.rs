use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::exchange::compute_fill;
use crate::helpers::validate_addr;
use crate::msg::{
    AssetInfo, ConfigResponse, PendingOwnerResponse, QuoteResponse, RateResponse,
    ReceivedTokenEntry, ReceivedTokenResponse, ReceivedTokensResponse, StatusResponse,
    TokenResponse, TotalRaisedResponse, WalletResponse,
};
use crate::rail::{Cw20Rail, NativeRail, PaymentRail};
use crate::state::{CONFIG, PENDING_OWNER, RECEIVED_TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        rate: config.rate,
        wallet: config.wallet,
        token: config.token,
        native_denom: config.native_denom,
        total_raised_native: config.total_raised_native,
    })
}

pub fn query_rate(deps: Deps) -> StdResult<RateResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RateResponse { rate: config.rate })
}

pub fn query_wallet(deps: Deps) -> StdResult<WalletResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(WalletResponse {
        wallet: config.wallet,
    })
}

pub fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenResponse {
        token: config.token,
    })
}

pub fn query_total_raised(deps: Deps) -> StdResult<TotalRaisedResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TotalRaisedResponse {
        total_raised: config.total_raised_native,
    })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    Ok(PendingOwnerResponse {
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

/// Unknown tokens return an empty record instead of an error.
pub fn query_received_token(deps: Deps, token: String) -> StdResult<ReceivedTokenResponse> {
    let token = deps.api.addr_validate(&token)?;
    let record = RECEIVED_TOKENS
        .may_load(deps.storage, &token)?
        .unwrap_or_default();
    Ok(ReceivedTokenResponse {
        name: record.name,
        rate: record.rate,
        raised: record.raised,
    })
}

pub fn query_received_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ReceivedTokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;

    let tokens = RECEIVED_TOKENS
        .range(
            deps.storage,
            start.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (token, record) = item?;
            Ok(ReceivedTokenEntry {
                token,
                name: record.name,
                rate: record.rate,
                raised: record.raised,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ReceivedTokensResponse { tokens })
}

/// Price `amount` of `asset` against the current supply without executing.
pub fn query_quote(
    deps: Deps,
    env: Env,
    asset: AssetInfo,
    amount: Uint128,
) -> Result<QuoteResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let rate = match asset {
        AssetInfo::Native { denom } => {
            if denom != config.native_denom {
                return Err(ContractError::InvalidDenom { denom });
            }
            config.rate
        }
        AssetInfo::Cw20 { address } => {
            let token = validate_addr(deps.api, &address)?;
            RECEIVED_TOKENS
                .may_load(deps.storage, &token)?
                .ok_or_else(|| ContractError::TokenNotReceived {
                    token: token.to_string(),
                })?
                .rate
        }
    };

    let available = Cw20Rail::held(config.token).balance(&deps.querier, &env.contract.address)?;
    let fill = compute_fill(amount, rate, available)?;

    Ok(QuoteResponse {
        accepted: fill.accepted,
        excess: fill.excess,
        issue: fill.issue,
    })
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;

    let tokens_available =
        Cw20Rail::held(config.token).balance(&deps.querier, &env.contract.address)?;
    let native_balance =
        NativeRail::new(config.native_denom).balance(&deps.querier, &env.contract.address)?;

    Ok(StatusResponse {
        tokens_available,
        native_balance,
        rate: config.rate,
    })
}
