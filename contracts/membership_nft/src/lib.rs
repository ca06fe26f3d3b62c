#![no_std]

mod errors;
mod nft;
mod types;

mod test;

pub use errors::NftError;
pub use nft::{MembershipNftContract, MembershipNftContractClient};
