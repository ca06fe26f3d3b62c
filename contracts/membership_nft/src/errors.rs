use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    TokenNotFound = 0,
    NotTokenOwner = 1,
    IndexOutOfBounds = 2,
}
