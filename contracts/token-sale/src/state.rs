use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Issued-token micro units granted per one unit of `native_denom`.
    pub rate: u64,
    /// Destination of all accepted proceeds.
    pub wallet: Addr,
    /// CW20 contract of the token being sold.
    pub token: Addr,
    pub native_denom: String,
    /// Native coins kept by the sale (refunded excess is never counted).
    pub total_raised_native: Uint128,
}

/// A CW20 token accepted as payment.
#[cw_serde]
#[derive(Default)]
pub struct ReceivedToken {
    pub name: String,
    pub rate: u64,
    pub raised: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const RECEIVED_TOKENS: Map<&Addr, ReceivedToken> = Map::new("received_tokens");

/// Pending owner for 2-step ownership transfer
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");
