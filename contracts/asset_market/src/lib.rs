#![no_std]

mod errors;
mod market;
mod types;

mod test;

pub use errors::MarketError;
pub use market::{AssetMarketContract, AssetMarketContractClient};
