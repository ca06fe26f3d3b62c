use soroban_sdk::{contract, contractevent, contractimpl, Address, Env, Vec};

use crate::errors::NftError;
use crate::types::DataKey;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    #[topic]
    pub to: Address,
    pub token_id: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub token_id: u32,
}

/// Enumerable membership collection. Minting is free and open to anyone;
/// token ids are handed out sequentially from zero.
#[contract]
pub struct MembershipNftContract;

#[contractimpl]
impl MembershipNftContract {
    pub fn mint(env: Env, to: Address) -> u32 {
        to.require_auth();

        let token_id = Self::total_supply(env.clone());
        env.storage().persistent().set(&DataKey::Owner(token_id), &to);

        let mut owned = Self::owned_tokens(&env, &to);
        owned.push_back(token_id);
        env.storage().persistent().set(&DataKey::OwnedTokens(to.clone()), &owned);

        env.storage().instance().set(&DataKey::TotalSupply, &(token_id + 1));

        Minted { to, token_id }.publish(&env);
        token_id
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), NftError> {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), token_id)?;
        if owner != from {
            return Err(NftError::NotTokenOwner);
        }

        // Swap-remove keeps the owner's enumeration dense.
        let mut from_tokens = Self::owned_tokens(&env, &from);
        if let Some(index) = from_tokens.first_index_of(token_id) {
            let last = from_tokens.pop_back_unchecked();
            if index < from_tokens.len() {
                from_tokens.set(index, last);
            }
        }
        env.storage().persistent().set(&DataKey::OwnedTokens(from.clone()), &from_tokens);

        let mut to_tokens = Self::owned_tokens(&env, &to);
        to_tokens.push_back(token_id);
        env.storage().persistent().set(&DataKey::OwnedTokens(to.clone()), &to_tokens);

        env.storage().persistent().set(&DataKey::Owner(token_id), &to);

        Transferred { from, to, token_id }.publish(&env);
        Ok(())
    }

    pub fn balance(env: Env, owner: Address) -> u32 {
        Self::owned_tokens(&env, &owner).len()
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, NftError> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(NftError::TokenNotFound)
    }

    pub fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> Result<u32, NftError> {
        Self::owned_tokens(&env, &owner)
            .get(index)
            .ok_or(NftError::IndexOutOfBounds)
    }

    pub fn total_supply(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0u32)
    }
}

impl MembershipNftContract {
    fn owned_tokens(env: &Env, owner: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::OwnedTokens(owner.clone()))
            .unwrap_or(Vec::new(env))
    }
}
