use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    PaymentToken,
    Price,
    AssetOwner(u32),
}
