#![cfg(test)]

use super::*;
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

const PRICE: i128 = 100;

fn setup<'a>(env: &Env) -> (AssetMarketContractClient<'a>, TokenClient<'a>, StellarAssetClient<'a>) {
    let issuer = Address::generate(env);
    let sac = env.register_stellar_asset_contract_v2(issuer);

    let contract_id = env.register(AssetMarketContract, ());
    let client = AssetMarketContractClient::new(env, &contract_id);
    client.initialize(&sac.address(), &PRICE);

    (
        client,
        TokenClient::new(env, &sac.address()),
        StellarAssetClient::new(env, &sac.address()),
    )
}

#[test]
fn test_purchase_success() {
    let env = Env::default();
    env.mock_all_auths();
    let (market, token, token_admin) = setup(&env);

    let buyer = Address::generate(&env);
    token_admin.mint(&buyer, &250);
    token.approve(&buyer, &market.address, &PRICE, &200);

    assert!(market.available(&7));
    assert_eq!(market.price(&7), PRICE);
    assert!(market.purchase(&buyer, &7, &PRICE));

    assert!(!market.available(&7));
    assert_eq!(market.owner_of(&7), Some(buyer.clone()));
    assert_eq!(token.balance(&buyer), 150);
    assert_eq!(token.balance(&market.address), PRICE);
}

#[test]
fn test_purchase_sold_asset() {
    let env = Env::default();
    env.mock_all_auths();
    let (market, token, token_admin) = setup(&env);

    let first = Address::generate(&env);
    let second = Address::generate(&env);
    token_admin.mint(&first, &PRICE);
    token_admin.mint(&second, &PRICE);
    token.approve(&first, &market.address, &PRICE, &200);
    token.approve(&second, &market.address, &PRICE, &200);

    market.purchase(&first, &7, &PRICE);

    assert_eq!(
        market.try_purchase(&second, &7, &PRICE),
        Err(Ok(MarketError::AssetUnavailable))
    );
    assert_eq!(market.owner_of(&7), Some(first));
    assert_eq!(token.balance(&second), PRICE);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn test_purchase_wrong_amount() {
    let env = Env::default();
    env.mock_all_auths();
    let (market, token, token_admin) = setup(&env);

    let buyer = Address::generate(&env);
    token_admin.mint(&buyer, &PRICE);
    token.approve(&buyer, &market.address, &PRICE, &200);

    market.purchase(&buyer, &7, &(PRICE - 1));
}

#[test]
fn test_unsold_asset_has_no_owner() {
    let env = Env::default();
    let (market, _, _) = setup(&env);

    assert!(market.available(&3));
    assert_eq!(market.owner_of(&3), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_initialize_twice() {
    let env = Env::default();
    let (market, token, _) = setup(&env);
    market.initialize(&token.address, &PRICE);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_initialize_zero_price() {
    let env = Env::default();
    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);

    let contract_id = env.register(AssetMarketContract, ());
    let client = AssetMarketContractClient::new(&env, &contract_id);
    client.initialize(&sac.address(), &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #0)")]
fn test_price_before_initialize() {
    let env = Env::default();
    let contract_id = env.register(AssetMarketContract, ());
    let client = AssetMarketContractClient::new(&env, &contract_id);
    client.price(&1);
}
