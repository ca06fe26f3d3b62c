//! Contracts the DAO calls out to. Any deployed contract exposing these
//! functions can be wired in through `initialize`.

use soroban_sdk::{contractclient, Address, Env};

/// Membership NFT collection. Holding at least one token grants the right
/// to propose and vote; each token carries one vote per proposal.
#[contractclient(name = "MembershipClient")]
pub trait MembershipRegistry {
    fn balance(env: Env, owner: Address) -> u32;

    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> u32;
}

/// Marketplace the treasury buys assets from.
#[contractclient(name = "AssetMarketClient")]
pub trait AssetMarket {
    fn available(env: Env, token_id: u32) -> bool;

    fn price(env: Env, token_id: u32) -> i128;

    /// Pulls `amount` of the payment token from `buyer` and hands the asset
    /// over. Returns false if the sale did not go through.
    fn purchase(env: Env, buyer: Address, token_id: u32, amount: i128) -> bool;
}
