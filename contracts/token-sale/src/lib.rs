pub mod contract;
pub mod error;
pub mod exchange;
pub mod execute;
pub mod helpers;
pub mod msg;
pub mod query;
pub mod rail;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use crate::error::ContractError;
