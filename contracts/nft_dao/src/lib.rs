#![no_std]

mod dao;
mod errors;
mod events;
pub mod interfaces;
mod storage;
mod types;


pub use dao::{NftDaoContract, NftDaoContractClient, VOTING_PERIOD};
pub use errors::DaoError;
pub use events::{ProposalCreated, ProposalExecuted, TreasuryDeposited, TreasuryWithdrawn, VoteCast};
pub use types::{Config, Proposal, ProposalState, Vote};
