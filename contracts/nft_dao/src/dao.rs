use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use crate::errors::DaoError;
use crate::events::{
    ProposalCreated, ProposalExecuted, TreasuryDeposited, TreasuryWithdrawn, VoteCast,
};
use crate::interfaces::{AssetMarketClient, MembershipClient};
use crate::storage;
use crate::types::{Config, Proposal, ProposalState, Vote};

/// Length of the voting window of every proposal, in seconds.
pub const VOTING_PERIOD: u64 = 300;

#[contract]
pub struct NftDaoContract;

#[contractimpl]
impl NftDaoContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        membership: Address,
        market: Address,
        payment_token: Address,
    ) -> Result<(), DaoError> {
        if storage::is_initialized(&env) {
            return Err(DaoError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = Config {
            owner,
            membership,
            market,
            payment_token,
        };
        storage::save_config(&env, &config);

        log!(&env, "dao initialized", config.owner, config.membership, config.market);
        Ok(())
    }

    pub fn create_proposal(env: Env, caller: Address, asset_token_id: u32) -> Result<u64, DaoError> {
        let config = storage::load_config(&env)?;
        caller.require_auth();

        Self::require_member(&env, &config, &caller)?;

        let market = AssetMarketClient::new(&env, &config.market);
        if !market.available(&asset_token_id) {
            return Err(DaoError::AssetUnavailable);
        }

        let deadline = env.ledger().timestamp() + VOTING_PERIOD;
        let proposal = storage::append_proposal(&env, asset_token_id, deadline);

        ProposalCreated {
            proposal_id: proposal.id,
            creator: caller,
            asset_token_id,
            deadline,
        }
        .publish(&env);

        Ok(proposal.id)
    }

    /// Spends every membership token the caller holds that has not yet voted
    /// on this proposal. Tokens already used here are skipped, so a token
    /// passed on to another member cannot vote twice on the same proposal.
    pub fn vote_on_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        vote: Vote,
    ) -> Result<(), DaoError> {
        let config = storage::load_config(&env)?;
        caller.require_auth();

        let mut proposal = storage::load_proposal(&env, proposal_id)?;
        if !proposal.is_active(env.ledger().timestamp()) {
            return Err(DaoError::VotingClosed);
        }

        let membership = MembershipClient::new(&env, &config.membership);
        let balance = membership.balance(&caller);
        if balance == 0 {
            return Err(DaoError::NotAMember);
        }

        let mut weight: u32 = 0;
        for index in 0..balance {
            let token_id = membership.token_of_owner_by_index(&caller, &index);
            if storage::has_voted(&env, proposal_id, token_id) {
                continue;
            }
            storage::mark_voted(&env, proposal_id, token_id);
            weight += 1;
        }

        if weight == 0 {
            return Err(DaoError::AlreadyVotedWithAllTokens);
        }

        match vote {
            Vote::Yay => proposal.yay_votes += weight,
            Vote::Nay => proposal.nay_votes += weight,
        }
        storage::save_proposal(&env, &proposal);

        VoteCast {
            proposal_id,
            voter: caller,
            vote,
            weight,
        }
        .publish(&env);

        Ok(())
    }

    /// Closes a proposal whose deadline has passed. Anyone may call it.
    /// An approved proposal buys its asset at the current market price; a
    /// rejected or tied one is closed without a purchase.
    pub fn execute_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), DaoError> {
        let config = storage::load_config(&env)?;
        caller.require_auth();

        let mut proposal = storage::load_proposal(&env, proposal_id)?;
        if proposal.is_active(env.ledger().timestamp()) {
            return Err(DaoError::DeadlineNotReached);
        }
        if proposal.executed {
            return Err(DaoError::AlreadyExecuted);
        }

        let purchased = proposal.is_approved();
        let price = if purchased {
            Self::purchase_asset(&env, &config, proposal.asset_token_id)?
        } else {
            0
        };

        proposal.executed = true;
        storage::save_proposal(&env, &proposal);

        log!(&env, "proposal executed", proposal_id, purchased, price);
        ProposalExecuted {
            proposal_id,
            purchased,
            price,
        }
        .publish(&env);

        Ok(())
    }

    /// Sends the whole treasury to the owner and returns the amount sent.
    pub fn withdraw_ether(env: Env, caller: Address) -> Result<i128, DaoError> {
        let config = storage::load_config(&env)?;
        caller.require_auth();

        if caller != config.owner {
            return Err(DaoError::NotOwner);
        }

        let amount = storage::treasury_balance(&env);
        if amount > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&env.current_contract_address(), &config.owner, &amount);
        }
        storage::set_treasury_balance(&env, 0);

        TreasuryWithdrawn {
            to: config.owner,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), DaoError> {
        let config = storage::load_config(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(DaoError::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        let balance = storage::treasury_balance(&env);
        storage::set_treasury_balance(&env, balance + amount);

        TreasuryDeposited { from, amount }.publish(&env);
        Ok(())
    }

    pub fn num_proposals(env: Env) -> Result<u64, DaoError> {
        storage::load_config(&env)?;
        Ok(storage::proposal_count(&env))
    }

    pub fn owner(env: Env) -> Result<Address, DaoError> {
        Ok(storage::load_config(&env)?.owner)
    }

    pub fn proposal(env: Env, proposal_id: u64) -> Result<Proposal, DaoError> {
        storage::load_config(&env)?;
        storage::load_proposal(&env, proposal_id)
    }

    pub fn proposal_state(env: Env, proposal_id: u64) -> Result<ProposalState, DaoError> {
        storage::load_config(&env)?;
        let proposal = storage::load_proposal(&env, proposal_id)?;
        Ok(proposal.state(env.ledger().timestamp()))
    }

    pub fn treasury(env: Env) -> Result<i128, DaoError> {
        storage::load_config(&env)?;
        Ok(storage::treasury_balance(&env))
    }

    pub fn config(env: Env) -> Result<Config, DaoError> {
        storage::load_config(&env)
    }
}

impl NftDaoContract {
    fn require_member(env: &Env, config: &Config, caller: &Address) -> Result<(), DaoError> {
        let membership = MembershipClient::new(env, &config.membership);
        if membership.balance(caller) == 0 {
            return Err(DaoError::NotAMember);
        }
        Ok(())
    }

    /// Pays for `asset_token_id` out of the treasury. Nothing is written to
    /// the DAO's storage unless the market reports the sale as done.
    fn purchase_asset(env: &Env, config: &Config, asset_token_id: u32) -> Result<i128, DaoError> {
        let market = AssetMarketClient::new(env, &config.market);
        let price = market.price(&asset_token_id);
        if price < 0 {
            return Err(DaoError::InvalidAmount);
        }

        let balance = storage::treasury_balance(env);
        if balance < price {
            return Err(DaoError::InsufficientTreasuryFunds);
        }

        // The market pulls the payment itself, bounded by this allowance.
        let dao = env.current_contract_address();
        let token_client = token::Client::new(env, &config.payment_token);
        token_client.approve(&dao, &config.market, &price, &env.ledger().sequence());

        if !market.purchase(&dao, &asset_token_id, &price) {
            return Err(DaoError::PurchaseFailed);
        }

        storage::set_treasury_balance(env, balance - price);
        Ok(price)
    }
}
