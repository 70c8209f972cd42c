pub mod client;
pub mod restful;

pub use client::BybitClient;
pub use restful::models::{
    AccountType, Balance, BalanceResponse, BalanceResult, Coin, RestApi, TransferResponse,
    TransferResult, TransferType,
};
