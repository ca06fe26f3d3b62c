use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    ProposalCount,
    Treasury,
    Proposal(u64),
    // (proposal_id, membership token id)
    Voted(u64, u32),
}

/// Addresses wired in by `initialize`. Never rewritten.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub membership: Address,
    pub market: Address,
    pub payment_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub asset_token_id: u32,
    pub deadline: u64,
    pub yay_votes: u32,
    pub nay_votes: u32,
    pub executed: bool,
}

impl Proposal {
    pub fn is_active(&self, now: u64) -> bool {
        now < self.deadline
    }

    /// Strict majority, ties reject.
    pub fn is_approved(&self) -> bool {
        self.yay_votes > self.nay_votes
    }

    pub fn state(&self, now: u64) -> ProposalState {
        if self.executed {
            ProposalState::Executed
        } else if self.is_active(now) {
            ProposalState::Active
        } else if self.is_approved() {
            ProposalState::Approved
        } else {
            ProposalState::Rejected
        }
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Vote {
    Yay = 0,
    Nay = 1,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    Active = 0,
    Rejected = 1,
    Approved = 2,
    Executed = 3,
}
