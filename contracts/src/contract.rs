//! Public entry points of the prediction market contract.

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

use crate::dispatcher;
use crate::errors::ContractError;
use crate::escrow;
use crate::registry;
use crate::storage;
use crate::types::{Command, CommandOutcome, Market, OracleReport, Position};

#[contract]
pub struct PredictionMarketContract;

#[contractimpl]
impl PredictionMarketContract {
    /// Initializes the contract with the admin and the oracle set (one-time only)
    pub fn initialize(env: Env, admin: Address, oracles: Vec<Address>) -> Result<(), ContractError> {
        dispatcher::initialize(&env, &admin, &oracles)
    }

    /// Creates a market over `outcomes` that voids at ledger `deadline` (admin only)
    pub fn create_market(env: Env, outcomes: Vec<Symbol>, deadline: u32) -> Result<u64, ContractError> {
        let admin = storage::read_admin(&env).ok_or(ContractError::NotInitialized)?;
        dispatcher::create_market(&env, &admin, outcomes, deadline)
    }

    /// Stakes `amount` on `outcome`; repeated stakes add to the same position
    pub fn stake(
        env: Env,
        user: Address,
        market_id: u64,
        outcome: Symbol,
        amount: i128,
    ) -> Result<(), ContractError> {
        dispatcher::stake(&env, &user, market_id, &outcome, amount)
    }

    /// Records an oracle's report. Returns true if it resolved the market.
    pub fn submit_report(
        env: Env,
        oracle: Address,
        market_id: u64,
        outcome: Symbol,
    ) -> Result<bool, ContractError> {
        dispatcher::submit_report(&env, &oracle, market_id, &outcome)
    }

    /// Pays out the caller's position on a resolved or void market
    pub fn claim(env: Env, user: Address, market_id: u64) -> Result<i128, ContractError> {
        dispatcher::claim(&env, &user, market_id)
    }

    /// Persists the void state of a market past its deadline. Anyone may call.
    pub fn expire_market(env: Env, market_id: u64) -> Result<(), ContractError> {
        dispatcher::expire_market(&env, market_id)
    }

    /// Runs any command through the dispatcher
    pub fn execute(env: Env, caller: Address, command: Command) -> Result<CommandOutcome, ContractError> {
        dispatcher::dispatch(&env, &caller, command)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::read_admin(&env)
    }

    pub fn get_oracles(env: Env) -> Vec<Address> {
        storage::read_oracle_set(&env)
            .map(|oracle_set| oracle_set.members)
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn is_oracle(env: Env, address: Address) -> bool {
        registry::is_oracle(&env, &address)
    }

    pub fn quorum_threshold(env: Env) -> Result<u32, ContractError> {
        registry::quorum_threshold(&env)
    }

    pub fn market_count(env: Env) -> u64 {
        storage::market_count(&env)
    }

    /// Returns the market as of the current ledger, deadline applied
    pub fn get_market(env: Env, market_id: u64) -> Option<Market> {
        dispatcher::load_market(&env, market_id).ok()
    }

    pub fn get_position(env: Env, market_id: u64, user: Address) -> Option<Position> {
        storage::read_position(&env, market_id, &user)
    }

    pub fn get_report(env: Env, market_id: u64, oracle: Address) -> Option<OracleReport> {
        storage::read_report(&env, market_id, &oracle)
    }

    pub fn has_reported(env: Env, market_id: u64, oracle: Address) -> bool {
        storage::has_report(&env, market_id, &oracle)
    }

    /// Funds still held for a market
    pub fn escrow_balance(env: Env, market_id: u64) -> i128 {
        storage::read_market(&env, market_id)
            .map(|market| market.escrow())
            .unwrap_or(0)
    }

    /// Mints 1000 units for new users (one-time only)
    pub fn mint_initial(env: Env, user: Address) -> i128 {
        user.require_auth();
        escrow::mint_initial(&env, &user)
    }

    /// Returns user's balance
    pub fn balance(env: Env, user: Address) -> i128 {
        storage::read_balance(&env, &user)
    }
}
