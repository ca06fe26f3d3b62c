//! Proposal arena, per-token vote flags and the treasury counter.
//!
//! Proposals are never reordered or removed, so an id handed out by
//! `append_proposal` stays a valid key for the lifetime of the contract.

use soroban_sdk::Env;

use crate::errors::DaoError;
use crate::types::{Config, DataKey, Proposal};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_EXTEND_TO: u32 = 90 * DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load_config(env: &Env) -> Result<Config, DaoError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DaoError::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().set(&DataKey::ProposalCount, &0u64);
    env.storage().instance().set(&DataKey::Treasury, &0i128);
    bump_instance(env);
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

/// Allocates the next id and stores a fresh proposal under it.
pub fn append_proposal(env: &Env, asset_token_id: u32, deadline: u64) -> Proposal {
    let id = proposal_count(env);
    let proposal = Proposal {
        id,
        asset_token_id,
        deadline,
        yay_votes: 0,
        nay_votes: 0,
        executed: false,
    };
    save_proposal(env, &proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(id + 1));
    bump_instance(env);
    proposal
}

pub fn load_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, DaoError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(DaoError::ProposalNotFound)
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn has_voted(env: &Env, proposal_id: u64, token_id: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voted(proposal_id, token_id))
}

pub fn mark_voted(env: &Env, proposal_id: u64, token_id: u32) {
    let key = DataKey::Voted(proposal_id, token_id);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn treasury_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .unwrap_or(0i128)
}

pub fn set_treasury_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Treasury, &amount);
    bump_instance(env);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}
