use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Issued-token micro units per one unit of `native_denom`
    pub rate: u64,
    /// Address that receives all accepted payments
    pub wallet: String,
    /// CW20 contract of the token being sold
    pub token: String,
    /// Bank denom accepted by `Buy` / `BuyTokens`
    pub native_denom: String,
}

/// Payment asset: a bank denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { address: String },
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy with attached native funds; the sender receives the tokens.
    Buy {},

    /// Buy with attached native funds on behalf of `beneficiary`.
    BuyTokens { beneficiary: String },

    /// Pay with an accepted CW20 token. The sale pulls `amount` through an
    /// allowance previously granted by the sender.
    DepositToken { token: String, amount: Uint128 },

    /// CW20 receive hook: pay with an accepted token via `Send`, or fund
    /// the sale with the issued token.
    Receive(Cw20ReceiveMsg),

    /// Owner: change the native rate
    UpdateRate { rate: u64 },

    /// Owner: change the proceeds wallet
    UpdateWallet { wallet: String },

    /// Owner: change the issued token contract
    UpdateToken { token: String },

    /// Owner: accept a CW20 token as payment (resets `raised`)
    AddReceivedToken {
        token: String,
        name: String,
        rate: u64,
    },

    /// Owner: stop accepting a CW20 token
    RemoveReceivedToken { token: String },

    /// Owner: change the rate of an accepted token
    SetReceivedTokenRate { token: String, rate: u64 },

    /// Owner: send the sale's whole balance of any asset to the wallet
    WithdrawAnyAsset { asset: AssetInfo },

    /// Owner: propose a new owner (step 1 of 2-step transfer)
    TransferOwnership { new_owner: String },

    /// Pending owner: accept ownership (step 2 of 2-step transfer)
    AcceptOwnership {},
}

/// CW20 receive sub-message
#[cw_serde]
pub enum ReceiveMsg {
    /// Buy with the sent tokens. Defaults to the CW20 sender as beneficiary.
    Purchase { beneficiary: Option<String> },
    /// Top up the supply for sale (issued token only)
    Fund {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(RateResponse)]
    Rate {},

    #[returns(WalletResponse)]
    Wallet {},

    #[returns(TokenResponse)]
    Token {},

    #[returns(TotalRaisedResponse)]
    TotalRaisedNative {},

    #[returns(PendingOwnerResponse)]
    PendingOwner {},

    /// Registry record; unknown tokens return an empty record
    #[returns(ReceivedTokenResponse)]
    ReceivedToken { token: String },

    #[returns(ReceivedTokensResponse)]
    ReceivedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Preview how a payment would be filled right now
    #[returns(QuoteResponse)]
    Quote { asset: AssetInfo, amount: Uint128 },

    /// Tokens left for sale and native balance held
    #[returns(StatusResponse)]
    Status {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub rate: u64,
    pub wallet: Addr,
    pub token: Addr,
    pub native_denom: String,
    pub total_raised_native: Uint128,
}

#[cw_serde]
pub struct RateResponse {
    pub rate: u64,
}

#[cw_serde]
pub struct WalletResponse {
    pub wallet: Addr,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct TotalRaisedResponse {
    pub total_raised: Uint128,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct ReceivedTokenResponse {
    pub name: String,
    pub rate: u64,
    pub raised: Uint128,
}

#[cw_serde]
pub struct ReceivedTokenEntry {
    pub token: Addr,
    pub name: String,
    pub rate: u64,
    pub raised: Uint128,
}

#[cw_serde]
pub struct ReceivedTokensResponse {
    pub tokens: Vec<ReceivedTokenEntry>,
}

#[cw_serde]
pub struct QuoteResponse {
    /// Part of the payment the sale keeps
    pub accepted: Uint128,
    /// Part of the payment refunded to the payer
    pub excess: Uint128,
    /// Issued tokens the beneficiary receives
    pub issue: Uint128,
}

#[cw_serde]
pub struct StatusResponse {
    /// Issued tokens available for sale
    pub tokens_available: Uint128,
    /// Native balance held by the contract
    pub native_balance: Uint128,
    pub rate: u64,
}
