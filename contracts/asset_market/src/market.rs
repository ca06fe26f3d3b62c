use soroban_sdk::{contract, contractevent, contractimpl, token, Address, Env};

use crate::errors::MarketError;
use crate::types::DataKey;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetSold {
    #[topic]
    pub token_id: u32,
    pub buyer: Address,
    pub price: i128,
}

/// Sells every asset id once, at one flat price.
#[contract]
pub struct AssetMarketContract;

#[contractimpl]
impl AssetMarketContract {
    pub fn initialize(env: Env, payment_token: Address, price: i128) -> Result<(), MarketError> {
        if env.storage().instance().has(&DataKey::Price) {
            return Err(MarketError::AlreadyInitialized);
        }
        if price <= 0 {
            return Err(MarketError::InvalidPrice);
        }

        env.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::Price, &price);
        Ok(())
    }

    pub fn price(env: Env, token_id: u32) -> Result<i128, MarketError> {
        let _ = token_id;
        env.storage()
            .instance()
            .get(&DataKey::Price)
            .ok_or(MarketError::NotInitialized)
    }

    pub fn available(env: Env, token_id: u32) -> bool {
        !env.storage().persistent().has(&DataKey::AssetOwner(token_id))
    }

    pub fn owner_of(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::AssetOwner(token_id))
    }

    /// Collects `amount` from the buyer's allowance to this contract and
    /// records the buyer as the asset's owner.
    pub fn purchase(env: Env, buyer: Address, token_id: u32, amount: i128) -> Result<bool, MarketError> {
        buyer.require_auth();

        let price = Self::price(env.clone(), token_id)?;
        if !Self::available(env.clone(), token_id) {
            return Err(MarketError::AssetUnavailable);
        }
        if amount != price {
            return Err(MarketError::IncorrectPayment);
        }

        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(MarketError::NotInitialized)?;
        let market = env.current_contract_address();
        token::Client::new(&env, &payment_token).transfer_from(&market, &buyer, &market, &amount);

        env.storage()
            .persistent()
            .set(&DataKey::AssetOwner(token_id), &buyer);

        AssetSold {
            token_id,
            buyer,
            price,
        }
        .publish(&env);

        Ok(true)
    }
}
