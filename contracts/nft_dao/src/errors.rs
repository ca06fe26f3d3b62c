use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DaoError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    // Eligibility
    NotAMember = 2,
    NotOwner = 3,
    // Temporal
    VotingClosed = 4,
    DeadlineNotReached = 5,
    // Lookup
    ProposalNotFound = 6,
    // State conflict
    AlreadyExecuted = 7,
    AlreadyVotedWithAllTokens = 8,
    // Resource
    InsufficientTreasuryFunds = 9,
    AssetUnavailable = 10,
    PurchaseFailed = 11,
    InvalidAmount = 12,
}
