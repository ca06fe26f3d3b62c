#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

fn create_client<'a>(env: &Env) -> MembershipNftContractClient<'a> {
    let contract_id = env.register(MembershipNftContract, ());
    MembershipNftContractClient::new(env, &contract_id)
}

#[test]
fn test_mint_sequential_ids() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_client(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&alice), 0);
    assert_eq!(client.mint(&bob), 1);
    assert_eq!(client.mint(&alice), 2);

    assert_eq!(client.total_supply(), 3);
    assert_eq!(client.balance(&alice), 2);
    assert_eq!(client.balance(&bob), 1);
    assert_eq!(client.owner_of(&1), bob);
    assert_eq!(client.token_of_owner_by_index(&alice, &0), 0);
    assert_eq!(client.token_of_owner_by_index(&alice, &1), 2);
}

#[test]
fn test_balance_of_stranger_is_zero() {
    let env = Env::default();
    let client = create_client(&env);

    assert_eq!(client.balance(&Address::generate(&env)), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #0)")]
fn test_owner_of_unminted() {
    let env = Env::default();
    let client = create_client(&env);
    client.owner_of(&4);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_token_index_out_of_bounds() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_client(&env);

    let alice = Address::generate(&env);
    client.mint(&alice);
    client.token_of_owner_by_index(&alice, &1);
}

#[test]
fn test_transfer_updates_enumeration() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_client(&env);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&alice);
    client.mint(&alice);
    client.mint(&alice);

    // Token 0 sits first; the last token moves into its slot.
    client.transfer(&alice, &bob, &0);

    assert_eq!(client.owner_of(&0), bob);
    assert_eq!(client.balance(&alice), 2);
    assert_eq!(client.balance(&bob), 1);
    assert_eq!(client.token_of_owner_by_index(&alice, &0), 2);
    assert_eq!(client.token_of_owner_by_index(&alice, &1), 1);
    assert_eq!(client.token_of_owner_by_index(&bob, &0), 0);

    client.transfer(&alice, &bob, &1);
    assert_eq!(client.balance(&alice), 1);
    assert_eq!(client.token_of_owner_by_index(&alice, &0), 2);
}

#[test]
fn test_transfer_by_non_owner() {
    let env = Env::default();
    env.mock_all_auths();
    let client = create_client(&env);

    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);
    client.mint(&alice);

    assert_eq!(
        client.try_transfer(&mallory, &mallory, &0),
        Err(Ok(NftError::NotTokenOwner))
    );
    assert_eq!(
        client.try_transfer(&alice, &mallory, &9),
        Err(Ok(NftError::TokenNotFound))
    );
    assert_eq!(client.owner_of(&0), alice);
}
