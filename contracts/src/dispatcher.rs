//! Command dispatcher: the one path through which state changes.
//!
//! Each handler authenticates its caller, loads the market (applying the
//! deadline), runs every check, and only then writes. A failed handler
//! leaves storage untouched.

use soroban_sdk::{log, Address, Env, Map, Symbol, Vec};

use crate::constants::{MAX_OUTCOMES, MIN_OUTCOMES};
use crate::errors::ContractError;
use crate::events::{InitializedEvent, MarketCreatedEvent};
use crate::types::{Command, CommandOutcome, Market, MarketState};
use crate::{escrow, registry, resolution, storage};

pub(crate) fn dispatch(
    env: &Env,
    caller: &Address,
    command: Command,
) -> Result<CommandOutcome, ContractError> {
    match command {
        Command::Initialize(oracles) => {
            initialize(env, caller, &oracles).map(|_| CommandOutcome::Initialized)
        }
        Command::CreateMarket(outcomes, deadline) => {
            create_market(env, caller, outcomes, deadline).map(CommandOutcome::MarketCreated)
        }
        Command::Stake(market_id, outcome, amount) => {
            stake(env, caller, market_id, &outcome, amount).map(|_| CommandOutcome::Staked)
        }
        Command::SubmitReport(market_id, outcome) => {
            submit_report(env, caller, market_id, &outcome).map(CommandOutcome::Reported)
        }
        Command::Claim(market_id) => claim(env, caller, market_id).map(CommandOutcome::Claimed),
        Command::ExpireMarket(market_id) => {
            expire_market(env, market_id).map(|_| CommandOutcome::Expired)
        }
    }
}

/// Sets the admin and the oracle registry (one-time only)
pub(crate) fn initialize(env: &Env, admin: &Address, oracles: &Vec<Address>) -> Result<(), ContractError> {
    admin.require_auth();

    if storage::read_admin(env).is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let oracle_set = registry::register(env, oracles)?;
    storage::write_admin(env, admin);

    InitializedEvent {
        admin: admin.clone(),
        oracle_count: oracle_set.members.len(),
        quorum: oracle_set.quorum,
    }
    .publish(env);

    Ok(())
}

/// Opens a new market (admin only)
pub(crate) fn create_market(
    env: &Env,
    caller: &Address,
    outcomes: Vec<Symbol>,
    deadline: u32,
) -> Result<u64, ContractError> {
    caller.require_auth();

    let admin = storage::read_admin(env).ok_or(ContractError::NotInitialized)?;
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    let oracle_set = registry::oracle_set(env)?;

    let count = outcomes.len();
    if !(MIN_OUTCOMES..=MAX_OUTCOMES).contains(&count) {
        return Err(ContractError::InvalidOutcomeSet);
    }
    let mut seen: Map<Symbol, bool> = Map::new(env);
    for outcome in outcomes.iter() {
        if seen.contains_key(outcome.clone()) {
            return Err(ContractError::InvalidOutcomeSet);
        }
        seen.set(outcome, true);
    }

    let height = env.ledger().sequence();
    if deadline <= height {
        return Err(ContractError::InvalidDeadline);
    }

    let mut outcome_totals = Vec::new(env);
    let mut report_tallies = Vec::new(env);
    for _ in 0..count {
        outcome_totals.push_back(0i128);
        report_tallies.push_back(0u32);
    }

    let id = storage::next_market_id(env)?;
    let market = Market {
        id,
        outcomes,
        outcome_totals,
        report_tallies,
        reports: 0,
        oracle_count: oracle_set.members.len(),
        quorum: oracle_set.quorum,
        state: MarketState::Open,
        winning_outcome: None,
        total_pool: 0,
        paid_out: 0,
        winning_claimed: 0,
        created_at: height,
        deadline,
        resolved_at: None,
    };
    storage::write_market(env, &market);
    storage::bump_registry(env);

    log!(env, "market created", id, deadline);
    MarketCreatedEvent {
        market_id: id,
        outcome_count: count,
        deadline,
    }
    .publish(env);

    Ok(id)
}

pub(crate) fn stake(
    env: &Env,
    user: &Address,
    market_id: u64,
    outcome: &Symbol,
    amount: i128,
) -> Result<(), ContractError> {
    user.require_auth();

    let mut market = load_market(env, market_id)?;
    escrow::stake(env, &mut market, user, outcome, amount)
}

pub(crate) fn submit_report(
    env: &Env,
    oracle: &Address,
    market_id: u64,
    outcome: &Symbol,
) -> Result<bool, ContractError> {
    oracle.require_auth();

    let mut market = load_market(env, market_id)?;
    resolution::submit_report(env, &mut market, oracle, outcome)
}

pub(crate) fn claim(env: &Env, user: &Address, market_id: u64) -> Result<i128, ContractError> {
    user.require_auth();

    let mut market = storage::read_market(env, market_id)?;
    let height = env.ledger().sequence();
    let voided = market.apply_deadline(height);

    let payout = escrow::claim(env, &mut market, user)?;
    if voided {
        resolution::publish_voided(env, &market, height);
    }

    Ok(payout)
}

/// Voids a market past its deadline. Open to any caller.
pub(crate) fn expire_market(env: &Env, market_id: u64) -> Result<(), ContractError> {
    resolution::expire(env, market_id)
}

/// Stored market with the deadline applied as of the current ledger.
pub(crate) fn load_market(env: &Env, market_id: u64) -> Result<Market, ContractError> {
    let mut market = storage::read_market(env, market_id)?;
    market.apply_deadline(env.ledger().sequence());
    Ok(market)
}
