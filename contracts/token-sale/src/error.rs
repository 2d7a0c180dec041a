use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid rate: must be > 0")]
    InvalidRate,

    #[error("Invalid address: {address:?}")]
    InvalidAddress { address: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Send exactly one coin denomination")]
    MultipleDenoms,

    #[error("Invalid denom: {denom:?}")]
    InvalidDenom { denom: String },

    #[error("This message does not accept native funds")]
    UnexpectedFunds,

    #[error("Token is not accepted as payment: {token}")]
    TokenNotReceived { token: String },

    #[error("Sold out: no tokens left for sale")]
    SoldOut,

    #[error("Cannot migrate from {previous_contract} {previous_version}")]
    InvalidMigration {
        previous_contract: String,
        previous_version: String,
    },
}
