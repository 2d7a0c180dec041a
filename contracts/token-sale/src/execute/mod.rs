pub mod admin;
pub mod deposit;
pub mod ownership;
pub mod purchase;
pub mod registry;
pub mod withdraw;
