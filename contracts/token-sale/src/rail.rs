use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// An asset the sale can receive, hold and send.
pub trait PaymentRail {
    /// Message moving `amount` from `payer` into the sale, or `None` when the
    /// funds already arrived with the call.
    fn pull(&self, payer: &Addr, sale: &Addr, amount: Uint128) -> StdResult<Option<CosmosMsg>>;

    /// Message sending `amount` from the sale to `to`.
    fn push(&self, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg>;

    fn balance(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128>;
}

/// Bank coins of one denom. Payments come attached to the message.
pub struct NativeRail {
    pub denom: String,
}

impl NativeRail {
    pub fn new(denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
        }
    }
}

impl PaymentRail for NativeRail {
    fn pull(&self, _payer: &Addr, _sale: &Addr, _amount: Uint128) -> StdResult<Option<CosmosMsg>> {
        Ok(None)
    }

    fn push(&self, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Bank(BankMsg::Send {
            to_address: to.to_string(),
            amount: vec![Coin {
                denom: self.denom.clone(),
                amount,
            }],
        }))
    }

    fn balance(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128> {
        Ok(querier.query_balance(holder.to_string(), self.denom.clone())?.amount)
    }
}

/// A CW20 token contract.
pub struct Cw20Rail {
    pub contract: Addr,
    /// Pull payments with `TransferFrom` (allowance flow) instead of
    /// expecting them to be already held (`Send` hook).
    pub pull_from_payer: bool,
}

impl Cw20Rail {
    /// Tokens are already held by the sale.
    pub fn held(contract: Addr) -> Self {
        Self {
            contract,
            pull_from_payer: false,
        }
    }

    /// Tokens are pulled from the payer through an allowance.
    pub fn allowance(contract: Addr) -> Self {
        Self {
            contract,
            pull_from_payer: true,
        }
    }

    fn execute(&self, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.contract.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }))
    }
}

impl PaymentRail for Cw20Rail {
    fn pull(&self, payer: &Addr, sale: &Addr, amount: Uint128) -> StdResult<Option<CosmosMsg>> {
        if !self.pull_from_payer {
            return Ok(None);
        }
        self.execute(&Cw20ExecuteMsg::TransferFrom {
            owner: payer.to_string(),
            recipient: sale.to_string(),
            amount,
        })
        .map(Some)
    }

    fn push(&self, to: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(&Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount,
        })
    }

    fn balance(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128> {
        let res: BalanceResponse = querier.query_wasm_smart(
            self.contract.to_string(),
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )?;
        Ok(res.balance)
    }
}
