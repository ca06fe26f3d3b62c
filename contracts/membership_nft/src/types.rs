use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    TotalSupply,
    Owner(u32),
    OwnedTokens(Address),
}
