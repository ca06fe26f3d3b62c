use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    InvalidPrice = 2,
    AssetUnavailable = 3,
    IncorrectPayment = 4,
}
